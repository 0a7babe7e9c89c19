mod navigator;

pub use navigator::{NavigatorConfig, NavigatorConfigSource};
