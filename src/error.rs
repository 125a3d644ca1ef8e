//! Crate error type.

use thiserror::Error as ThisError;

use crate::models::Label;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid input: booking list is empty")]
    EmptyInput,
    #[error("invalid input: duplicate booking id {0}")]
    DuplicateBooking(Label),
    #[error("invalid configuration: trial count must be at least 1")]
    ZeroTrials,
    #[error("unknown booking id {0}")]
    UnknownBooking(Label),
    #[error("booking {from} does not link to booking {to}")]
    BrokenLink { from: Label, to: Label },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
