//! # Temporal Types — Millisecond Request Timestamps
//!
//! Defines `Timestamp`, the per-request nonce that feeds the auth hash.
//!
//! The API expects `ts` as a decimal string and hashes exactly that string,
//! so `Display` is the wire form and must not add separators, padding, or
//! a fractional part.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch.
///
/// Captured fresh for every outbound request. The same value is used both
/// as the `ts` query parameter and as the first segment of the hash input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Current UTC time in milliseconds.
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Build a timestamp from a raw millisecond value.
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// The raw millisecond value.
    pub fn as_millis(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
