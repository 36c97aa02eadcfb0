//! # marvel-crypto — Request Authentication
//!
//! Builds the `hash` parameter every API call must carry:
//!
//! ```text
//! hash = md5(ts + privateKey + publicKey)
//! ```
//!
//! rendered as 32 lowercase hex characters. The timestamp is the decimal
//! form of a [`marvel_core::Timestamp`]; there are no separators between
//! the three segments.
//!
//! ## Crate Policy
//!
//! - Depends only on `marvel-core` internally.
//! - The private key lives in `Zeroizing` buffers and never appears in
//!   `Debug` output or log fields.
//! - Token construction never fails from the caller's point of view. A
//!   digest failure is logged and yields an empty hash, which the API
//!   then rejects through the normal response path.

pub mod auth;
pub mod digest;

pub use auth::{AuthCredentials, AuthToken, AuthTokenBuilder};
pub use digest::{md5_digest, AuthHash, DigestUnavailable, Md5Digest, TokenDigest};
