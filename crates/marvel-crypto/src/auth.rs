//! # Auth Token Builder
//!
//! Derives the `(ts, hash)` pair that accompanies `apikey` on every request.
//!
//! ## Invariant
//!
//! Request builders accept only an [`AuthToken`], never a bare hash. A
//! token's fields are private and it can only be produced by
//! [`AuthTokenBuilder::token`], so the `ts` sent with a request is always
//! the one its hash was computed for. [`AuthTokenBuilder::hash`] exists for
//! callers that want the digest alone; its output cannot be attached to a
//! request.
//!
//! ## Failure Mode
//!
//! If the digest backend fails, the builder logs at `error` and returns an
//! empty hash instead of propagating. The request still goes out and the
//! API rejects it (401/409), which reaches the caller through the ordinary
//! failure path.

use std::fmt::Write as _;
use std::sync::Arc;

use marvel_core::Timestamp;
use zeroize::Zeroizing;

use crate::digest::{Md5Digest, TokenDigest};

/// The public/private key pair issued for an API account.
///
/// Custom `Debug` implementation redacts the private key.
#[derive(Clone)]
pub struct AuthCredentials {
    public_key: String,
    private_key: Zeroizing<String>,
}

impl AuthCredentials {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: Zeroizing::new(private_key.into()),
        }
    }

    /// The public key, sent verbatim as `apikey`.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub(crate) fn private_key(&self) -> &str {
        self.private_key.as_str()
    }
}

impl std::fmt::Debug for AuthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthCredentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// A timestamp and the hash computed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    timestamp: Timestamp,
    hash: String,
}

impl AuthToken {
    /// The timestamp the hash was computed for.
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// 32 lowercase hex characters, or empty if the digest failed.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// `true` if the hash could not be computed.
    pub fn is_degraded(&self) -> bool {
        self.hash.is_empty()
    }
}

/// Builds auth tokens from a fixed credential pair.
///
/// Holds no per-request state; one builder is shared by every caller.
#[derive(Debug, Clone)]
pub struct AuthTokenBuilder {
    credentials: AuthCredentials,
    digest: Arc<dyn TokenDigest>,
}

impl AuthTokenBuilder {
    /// Create a builder hashing with MD5.
    pub fn new(credentials: AuthCredentials) -> Self {
        Self::with_digest(credentials, Arc::new(Md5Digest))
    }

    /// Create a builder with an explicit digest backend.
    pub fn with_digest(credentials: AuthCredentials, digest: Arc<dyn TokenDigest>) -> Self {
        Self {
            credentials,
            digest,
        }
    }

    pub fn public_key(&self) -> &str {
        self.credentials.public_key()
    }

    /// Compute `md5(ts + privateKey + publicKey)` as lowercase hex.
    ///
    /// Returns an empty string if the digest backend fails.
    pub fn hash(&self, timestamp: Timestamp) -> String {
        let private_key = self.credentials.private_key();
        let public_key = self.credentials.public_key();

        let mut input = Zeroizing::new(String::with_capacity(
            20 + private_key.len() + public_key.len(),
        ));
        // Writing into a String cannot fail.
        let _ = write!(input, "{timestamp}{private_key}{public_key}");

        match self.digest.digest(input.as_bytes()) {
            Ok(hash) => hash.to_hex(),
            Err(e) => {
                tracing::error!(ts = %timestamp, "error hashing required auth parameters: {e}");
                String::new()
            }
        }
    }

    /// Build the token for a given timestamp.
    pub fn token(&self, timestamp: Timestamp) -> AuthToken {
        AuthToken {
            timestamp,
            hash: self.hash(timestamp),
        }
    }

    /// Build a token stamped with the current time.
    pub fn fresh_token(&self) -> AuthToken {
        self.token(Timestamp::now())
    }
}
