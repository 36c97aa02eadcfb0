//! # marvel-core — Foundational Types for the Marvel API Client
//!
//! The leaf crate of the workspace. Defines the small set of domain
//! primitives every other crate speaks in, so that request construction
//! never passes bare integers or strings where a typed value is meant.
//!
//! ## Key Design Principles
//!
//! 1. **Millisecond timestamps.** `Timestamp` is the nonce half of every
//!    auth token. It is captured once per request and rendered as a
//!    decimal string on the wire.
//!
//! 2. **Newtype identifiers.** `CharacterId` wraps the numeric id the API
//!    uses for characters. No bare `u64` in public signatures.
//!
//! 3. **Closed resource-kind enum.** `ComicKind` has exactly four variants
//!    (comics, series, stories, events). Routing matches on the variant; an
//!    unrecognized kind cannot be expressed.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `marvel-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod domain;
pub mod error;
pub mod identity;
pub mod paging;
pub mod temporal;

pub use domain::ComicKind;
pub use error::CoreError;
pub use identity::CharacterId;
pub use paging::Paging;
pub use temporal::Timestamp;
