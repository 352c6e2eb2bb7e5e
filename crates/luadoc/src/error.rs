use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Contract violation: a position past end-of-input was requested.
    #[error("offset {offset} is out of bounds for input of length {len}")]
    OutOfBounds { offset: usize, len: usize },

    /// Recursion guard for untrusted input.
    #[error("table nesting exceeds the limit of {limit}")]
    TooDeeplyNested { limit: usize },

    /// Strict-mode promotion of a recorded diagnostic.
    #[error("syntax at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },
}

pub type Result<T> = core::result::Result<T, Error>;
