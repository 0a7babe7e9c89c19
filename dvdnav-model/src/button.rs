use std::fmt;

/// Directional input from a remote or keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Author-encoded neighbors of a button. Each link is a 1-based button
/// number in the same packet; 0 means "no neighbor, stay put".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ButtonLinks {
    pub up: u8,
    pub down: u8,
    pub left: u8,
    pub right: u8,
}

impl ButtonLinks {
    pub fn get(&self, direction: Direction) -> u8 {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// Inclusive pixel rectangle of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonRect {
    pub x_start: u16,
    pub y_start: u16,
    pub x_end: u16,
    pub y_end: u16,
}

impl ButtonRect {
    pub fn new(x_start: u16, y_start: u16, x_end: u16, y_end: u16) -> Self {
        Self {
            x_start,
            y_start,
            x_end,
            y_end,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.x_start <= self.x_end && self.y_start <= self.y_end
    }

    /// Edges are part of the button.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= i32::from(self.x_start)
            && x <= i32::from(self.x_end)
            && y >= i32::from(self.y_start)
            && y <= i32::from(self.y_end)
    }

    /// Integer midpoint, rounded toward zero.
    pub fn center(&self) -> (i32, i32) {
        (
            (i32::from(self.x_start) + i32::from(self.x_end)) / 2,
            (i32::from(self.y_start) + i32::from(self.y_end)) / 2,
        )
    }

    pub fn width(&self) -> u16 {
        self.x_end.saturating_sub(self.x_start) + 1
    }

    pub fn height(&self) -> u16 {
        self.y_end.saturating_sub(self.y_start) + 1
    }
}

/// One VM instruction block attached to a button. Opaque to navigation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bytecode(pub [u8; 8]);

impl Bytecode {
    pub const LEN: usize = 8;

    pub fn bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// An all-zero instruction is the VM's NOP.
    pub fn is_nop(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Debug for Bytecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytecode(")?;
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        f.write_str(")")
    }
}

impl From<[u8; 8]> for Bytecode {
    fn from(bytes: [u8; 8]) -> Self {
        Bytecode(bytes)
    }
}

/// A selectable region of a menu.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonDescriptor {
    pub rect: ButtonRect,
    #[cfg_attr(feature = "serde", serde(default))]
    pub links: ButtonLinks,
    /// 0 = no color entry, otherwise 1-based index into the color table.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color_group: u8,
    /// Selecting this button implies activating it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub auto_action: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub command: Bytecode,
}

impl ButtonDescriptor {
    pub fn new(rect: ButtonRect) -> Self {
        Self {
            rect,
            ..Self::default()
        }
    }

    pub fn with_links(mut self, links: ButtonLinks) -> Self {
        self.links = links;
        self
    }

    pub fn with_color_group(mut self, group: u8) -> Self {
        self.color_group = group;
        self
    }

    pub fn with_auto_action(mut self, auto_action: bool) -> Self {
        self.auto_action = auto_action;
        self
    }

    pub fn with_command(mut self, command: impl Into<Bytecode>) -> Self {
        self.command = command.into();
        self
    }

    pub fn link(&self, direction: Direction) -> u8 {
        self.links.get(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_are_inclusive() {
        let rect = ButtonRect::new(10, 20, 30, 40);
        assert!(rect.contains(10, 20));
        assert!(rect.contains(30, 40));
        assert!(!rect.contains(9, 20));
        assert!(!rect.contains(30, 41));
        assert_eq!(rect.center(), (20, 30));
        assert_eq!(rect.width(), 21);
    }

    #[test]
    fn bytecode_debug_is_hex() {
        let code = Bytecode([0x30, 0x06, 0, 0, 0, 1, 0, 0]);
        assert_eq!(format!("{code:?}"), "Bytecode(30 06 00 00 00 01 00 00)");
        assert!(!code.is_nop());
        assert!(Bytecode::default().is_nop());
    }
}
