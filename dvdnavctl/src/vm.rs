use dvdnav_contracts::vm::{CommandOutcome, VirtualMachine, VmError};
use dvdnav_model::{Bytecode, SelectionRegister};

/// Stand-in VM for replays.
///
/// The highlight register is kept in its on-disc encoding. A NOP command does
/// nothing and any other command is treated as a jump, which is enough to
/// watch hop and still handling without a disc.
#[derive(Debug, Default)]
pub struct ScriptedVm {
    register: SelectionRegister,
    hop_channel: u32,
    units_advanced: u32,
    last_command: Option<Bytecode>,
}

impl ScriptedVm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units_advanced(&self) -> u32 {
        self.units_advanced
    }

    pub fn last_command(&self) -> Option<Bytecode> {
        self.last_command
    }
}

impl VirtualMachine for ScriptedVm {
    fn read_selection_register(&self) -> i32 {
        self.register.button()
    }

    fn write_selection_register(&mut self, button: i32) {
        self.register = SelectionRegister::from_button(button);
    }

    fn execute(&mut self, command: &Bytecode) -> Result<CommandOutcome, VmError> {
        self.last_command = Some(*command);
        if command.is_nop() {
            Ok(CommandOutcome::NoOp)
        } else {
            Ok(CommandOutcome::Jump)
        }
    }

    fn advance_to_next_unit(&mut self) -> Result<(), VmError> {
        self.units_advanced += 1;
        Ok(())
    }

    fn hop_channel(&self) -> u32 {
        self.hop_channel
    }

    fn bump_hop_channel(&mut self) {
        self.hop_channel = self.hop_channel.wrapping_add(1);
    }
}
