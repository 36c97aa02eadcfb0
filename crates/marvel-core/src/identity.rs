//! # Identifier Newtypes
//!
//! The API addresses characters by a numeric id. Wrapping it keeps
//! character ids from being confused with offsets, limits, or timestamps
//! in request-building code.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// Numeric identifier of a character (e.g. `1009610` for Spider-Man).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub u64);

impl CharacterId {
    /// Create a character identifier from its numeric value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Access the inner numeric value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for CharacterId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CharacterId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidCharacterId(s.to_string()))
    }
}
