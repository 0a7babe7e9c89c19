//! Library side of `dvdnavctl`: packet loading, input scripts, and the replay
//! driver used by the binary.

pub mod loader;
pub mod replay;
pub mod script;
pub mod vm;

pub use loader::{PacketFormat, load_packet};
pub use replay::{describe_packet, run_replay, units_advanced};
pub use script::{Step, parse_script};
pub use vm::ScriptedVm;
