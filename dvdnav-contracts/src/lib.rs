//! Trait surfaces for the collaborators the navigation core talks to: the
//! disc VM, the surrounding player's playback state, and the packet source.

pub mod playback;
pub mod vm;

/// Frequently used trait combinators for session and player crates.
pub mod prelude {
    pub use super::playback::{PacketSource, StillFrameState};
    pub use super::vm::{CommandOutcome, VirtualMachine, VmError};
}
