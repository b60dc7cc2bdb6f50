//! Error types for slotify

use crate::models::Instant;
use thiserror::Error;

/// Result type for slotify operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using slotify
#[derive(Error, Debug)]
pub enum Error {
    /// A validating constructor received `start > end`
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: Instant, end: Instant },

    /// A caller-supplied mapper failed during a sweep
    #[error("Mapping failed: {0}")]
    Mapping(String),

    /// Booking input has the wrong shape
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration text could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap any mapper failure into the crate error.
    ///
    /// Useful when caller mappers produce their own error type but the caller
    /// wants a single error type out of
    /// [`find_with_mapper`](crate::find_with_mapper).
    pub fn mapping(err: impl std::fmt::Display) -> Self {
        Error::Mapping(err.to_string())
    }

    pub(crate) fn invalid_range(start: Instant, end: Instant) -> Self {
        Error::InvalidRange { start, end }
    }
}
