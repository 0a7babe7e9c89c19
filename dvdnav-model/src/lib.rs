//! Navigation packet data model shared across dvdnav crates.
//!
//! Everything here is plain data decoded once per playable unit. Behavior
//! lives in `dvdnav-core`; trait surfaces for the VM and playback state live
//! in `dvdnav-contracts`.
#![allow(missing_docs)]

pub mod area;
pub mod button;
pub mod color;
pub mod error;
pub mod ids;
pub mod packet;
pub mod pci;
pub mod prelude;
pub mod register;

pub use area::{HighlightArea, HighlightStatus, PaletteMode};
pub use button::{
    ButtonDescriptor, ButtonLinks, ButtonRect, Bytecode, Direction,
};
pub use color::{ColorTable, COLOR_GROUPS};
pub use error::{ModelError, Result as ModelResult};
pub use ids::ButtonIndex;
pub use packet::{HighlightInfo, HighlightTiming, NavigationPacket, MAX_BUTTONS};
pub use register::SelectionRegister;
