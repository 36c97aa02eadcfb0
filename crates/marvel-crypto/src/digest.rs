//! # Auth Hash Digest
//!
//! Defines `AuthHash`, the raw 16-byte MD5 value behind the `hash` query
//! parameter, and the `TokenDigest` seam the token builder hashes through.
//!
//! ## Invariant
//!
//! `AuthHash::to_hex()` renders every byte as exactly two lowercase hex
//! digits, so the output is always 32 characters. A digest whose leading
//! bytes are zero keeps its leading `0` characters.

use md5::{Digest, Md5};

/// A 16-byte MD5 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthHash {
    pub bytes: [u8; 16],
}

impl AuthHash {
    pub fn new(bytes: [u8; 16]) -> Self {
        Self { bytes }
    }

    /// Render the digest as a 32-character lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for AuthHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The hashing primitive could not produce a digest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("digest unavailable: {0}")]
pub struct DigestUnavailable(pub String);

/// Hash function used to derive auth hashes.
///
/// Implementations must be `Send + Sync` so a single builder can be shared
/// across concurrent callers.
pub trait TokenDigest: Send + Sync + std::fmt::Debug {
    /// Digest `input` in one shot.
    fn digest(&self, input: &[u8]) -> Result<AuthHash, DigestUnavailable>;
}

/// MD5 backed by the RustCrypto `md-5` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Digest;

impl TokenDigest for Md5Digest {
    fn digest(&self, input: &[u8]) -> Result<AuthHash, DigestUnavailable> {
        Ok(md5_digest(input))
    }
}

/// Compute the MD5 digest of `input`.
pub fn md5_digest(input: &[u8]) -> AuthHash {
    let hash = Md5::digest(input);
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&hash);
    AuthHash::new(bytes)
}
