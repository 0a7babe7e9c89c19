use std::fmt::{self, Display};

/// Errors produced while building or decoding navigation packets.
#[derive(Debug)]
pub enum ModelError {
    Io(std::io::Error),
    Truncated { needed: usize, actual: usize },
    InvalidPacket(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Io(err) => write!(f, "io error: {err}"),
            ModelError::Truncated { needed, actual } => write!(
                f,
                "truncated packet: need {needed} bytes, got {actual}"
            ),
            ModelError::InvalidPacket(msg) => {
                write!(f, "invalid navigation packet: {msg}")
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Io(err) => Some(err),
            ModelError::Truncated { .. } | ModelError::InvalidPacket(_) => None,
        }
    }
}

impl From<std::io::Error> for ModelError {
    fn from(err: std::io::Error) -> Self {
        ModelError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
