//! Pure button-selection resolvers.
//!
//! Nothing here touches shared state. When a resolver's answer feeds a
//! selection, call it with the session lock held and the same packet snapshot
//! the selection will use.

mod direction;
mod pointer;

pub use direction::{Neighbor, resolve_direction};
pub use pointer::resolve_point;
