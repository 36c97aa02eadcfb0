//! Marvel API client configuration.
//!
//! Holds the gateway base URL, the account key pair, and the request
//! timeout. Defaults point at the production gateway. Override via
//! environment variables or explicit construction for staging/testing.

use marvel_crypto::AuthCredentials;
use url::Url;

/// Production gateway for the public API.
pub const DEFAULT_BASE_URL: &str = "https://gateway.marvel.com/v1/public/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the Marvel API.
///
/// `Debug` output never contains the private key; [`AuthCredentials`]
/// redacts it.
#[derive(Debug, Clone)]
pub struct MarvelApiConfig {
    /// Base URL that resource paths are joined onto. Always ends in `/`.
    pub base_url: Url,
    /// Public/private key pair for request signing.
    pub credentials: AuthCredentials,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl MarvelApiConfig {
    /// Build a configuration with the default timeout.
    pub fn new(base_url: Url, credentials: AuthCredentials) -> Self {
        Self {
            base_url: with_trailing_slash(base_url),
            credentials,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `MARVEL_PUBLIC_KEY` (required)
    /// - `MARVEL_PRIVATE_KEY` (required)
    /// - `MARVEL_BASE_URL` (default: `https://gateway.marvel.com/v1/public/`)
    /// - `MARVEL_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let public_key = lookup("MARVEL_PUBLIC_KEY")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingPublicKey)?;
        let private_key = lookup("MARVEL_PRIVATE_KEY")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingPrivateKey)?;

        let raw_url = lookup("MARVEL_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_url)
            .map_err(|e| ConfigError::InvalidUrl("MARVEL_BASE_URL".to_string(), e.to_string()))?;

        Ok(Self {
            base_url: with_trailing_slash(base_url),
            credentials: AuthCredentials::new(public_key, private_key),
            timeout_secs: lookup("MARVEL_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Create a configuration pointing at a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base` cannot be parsed.
    pub fn local_mock(
        base: &str,
        public_key: &str,
        private_key: &str,
    ) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base)
            .map_err(|e| ConfigError::InvalidUrl(base.to_string(), e.to_string()))?;
        Ok(Self {
            base_url: with_trailing_slash(base_url),
            credentials: AuthCredentials::new(public_key, private_key),
            timeout_secs: 5,
        })
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("MARVEL_PUBLIC_KEY environment variable is required")]
    MissingPublicKey,
    #[error("MARVEL_PRIVATE_KEY environment variable is required")]
    MissingPrivateKey,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
