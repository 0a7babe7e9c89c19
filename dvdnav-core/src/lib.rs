//! # dvdnav-core
//!
//! Interactive menu navigation for DVD playback: which button is highlighted,
//! how directional and pointer input move that highlight, and what happens
//! when a button is activated.
//!
//! ## Overview
//!
//! - **Resolvers** ([`resolve`]): pure lookups of the next button from a
//!   direction (author-encoded links) or a pointer position (hit test with
//!   nearest-center tie breaking).
//! - **Highlight state** ([`highlight`]): disabled / selected / activated,
//!   mirrored into the VM's highlight register, with change notifications.
//! - **Activation** ([`activation`]): hands the selected button's command to
//!   the VM and releases button-less still frames.
//! - **Projection** ([`projector`]): button + palette mode to a renderable
//!   [`HighlightArea`](dvdnav_model::HighlightArea).
//! - **Session** ([`session`]): owns all of the above behind one lock.
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use dvdnav_contracts::vm::VirtualMachine;
//! use dvdnav_core::{NavSession, StillFlag};
//! use dvdnav_model::{Direction, NavigationPacket};
//!
//! fn on_remote_right<V: VirtualMachine>(
//!     vm: V,
//!     packet: NavigationPacket,
//! ) -> Result<(), Box<dyn std::error::Error>> {
//!     let session = NavSession::new(vm, StillFlag::default());
//!     session.install_packet(Arc::new(packet));
//!     session.select_button(1)?;
//!     let outcome = session.select_direction(Direction::Right)?;
//!     println!("moved: {outcome:?}");
//!     Ok(())
//! }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Button activation and still-frame release
pub mod activation;

/// Error types for navigation operations
pub mod error;

/// Highlight state machine
pub mod highlight;

/// Session behavior switches
pub mod options;

/// Default still-frame state
pub mod playback;

/// Highlight rectangle and palette projection
pub mod projector;

/// Directional and pointer button resolvers
pub mod resolve;

/// Lock-guarded navigation session
pub mod session;

#[cfg(test)]
mod testing;

pub use activation::ActivationOutcome;
pub use error::{NavError, Result};
pub use highlight::{HighlightSnapshot, HighlightState};
pub use options::{SessionOptions, StillReleasePolicy};
pub use playback::StillFlag;
pub use session::{DirectionOutcome, NavSession};
