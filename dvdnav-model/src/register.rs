/// Encoding of the VM's highlighted-button system register.
///
/// Disc bytecode reads the button number from bits 10..15 of the register;
/// the low ten bits are unused by navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionRegister(pub u16);

impl SelectionRegister {
    const SHIFT: u32 = 10;

    pub fn from_button(button: i32) -> Self {
        // Six bits hold every button a packet can carry.
        let clamped = button.clamp(0, 0x3f) as u16;
        SelectionRegister(clamped << Self::SHIFT)
    }

    pub fn button(&self) -> i32 {
        i32::from(self.0 >> Self::SHIFT)
    }

    pub fn raw(&self) -> u16 {
        self.0
    }
}
