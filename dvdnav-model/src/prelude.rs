//! Glob-importable set of the commonly used model types.

pub use crate::area::{HighlightArea, HighlightStatus, PaletteMode};
pub use crate::button::{
    ButtonDescriptor, ButtonLinks, ButtonRect, Bytecode, Direction,
};
pub use crate::color::ColorTable;
pub use crate::ids::ButtonIndex;
pub use crate::packet::{HighlightInfo, HighlightTiming, NavigationPacket};
pub use crate::register::SelectionRegister;
