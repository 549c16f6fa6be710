//! Error types for the Nim crate

use thiserror::Error;

use crate::board::Pile;

/// Main error type for the Nim crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cannot take {count} from the {pile} pile ({available} left, 1 or 2 allowed)")]
    InvalidMove {
        pile: Pile,
        count: u32,
        available: u32,
    },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("cannot parse move '{input}': {reason}")]
    ParseMove { input: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }
}
