use dvdnav_contracts::vm::VmError;
use thiserror::Error;

/// Failures surfaced by navigation operations. None of them are fatal;
/// presentation layers treat the first two as "ignore this input".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("button {0} does not exist in the current navigation packet")]
    InvalidButton(i32),

    #[error("no button is currently selected")]
    NoCurrentButton,

    #[error(transparent)]
    Vm(#[from] VmError),
}

pub type Result<T> = std::result::Result<T, NavError>;
