//! Highlight state machine and its change notifications.

mod state;

pub use state::{HighlightSnapshot, HighlightState};
