//! # Error Types
//!
//! Errors raised while parsing core domain values from untrusted input
//! (command-line arguments, configuration).

use thiserror::Error;

/// Errors from constructing core domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The string does not name one of the four comic-family resource kinds.
    #[error("unknown comic kind {0:?}; expected one of: comics, series, stories, events")]
    UnknownComicKind(String),

    /// The string is not a valid numeric character identifier.
    #[error("invalid character id {0:?}")]
    InvalidCharacterId(String),
}
