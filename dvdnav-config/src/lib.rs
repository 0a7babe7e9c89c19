//! Shared configuration library for dvdnav.
//!
//! Loads [`NavigatorConfig`] from files or the environment, turns it into the
//! core's `SessionOptions`, and sets up `tracing` output for binaries.

pub mod models;
pub mod telemetry;

pub use models::{NavigatorConfig, NavigatorConfigSource};
pub use telemetry::init_tracing;
