//! # Comic Kind — Comic-Family Sub-Resources
//!
//! Defines `ComicKind`, the closed set of sub-resources that can be listed
//! for a character: `/characters/{id}/{kind}`.
//!
//! ## Invariant
//!
//! The path segment is derived only from the variant. There is no
//! constructor from an arbitrary string other than [`FromStr`], which
//! rejects anything outside the four known segments, so request builders
//! can never emit an unrecognized kind.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// A comic-family sub-resource of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComicKind {
    /// Individual comic issues the character appears in.
    Comics,
    /// Comic series the character appears in.
    Series,
    /// Stories the character appears in.
    Stories,
    /// Events the character takes part in.
    Events,
}

impl ComicKind {
    /// Every kind, in declaration order.
    pub const ALL: [ComicKind; 4] = [Self::Comics, Self::Series, Self::Stories, Self::Events];

    /// The URL path segment for this kind.
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            Self::Comics => "comics",
            Self::Series => "series",
            Self::Stories => "stories",
            Self::Events => "events",
        }
    }
}

impl std::fmt::Display for ComicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_path_segment())
    }
}

impl FromStr for ComicKind {
    type Err = CoreError;

    /// Parse a kind from its path segment. Matching is exact (lowercase).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comics" => Ok(Self::Comics),
            "series" => Ok(Self::Series),
            "stories" => Ok(Self::Stories),
            "events" => Ok(Self::Events),
            other => Err(CoreError::UnknownComicKind(other.to_string())),
        }
    }
}
