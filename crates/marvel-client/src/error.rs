//! Marvel API client error types.

/// Errors delivered to a request's callback.
///
/// Upstream rejections keep the HTTP status and raw body exactly as
/// received; nothing here remaps one code to another.
#[derive(Debug, thiserror::Error)]
pub enum MarvelApiError {
    /// HTTP transport error (connect, TLS, timeout).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The API returned a non-2xx status.
    #[error("Marvel API {endpoint} returned {status}: {body}")]
    ApiError {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The request path could not be joined onto the base URL.
    #[error("invalid request URL for {endpoint}: {source}")]
    Url {
        endpoint: String,
        source: url::ParseError,
    },
    /// The request was dropped before it produced a result, e.g. because
    /// the runtime executing it shut down.
    #[error("request to {endpoint} was dropped before completion")]
    Cancelled { endpoint: String },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// The HTTP client or its runtime binding could not be created.
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl MarvelApiError {
    /// HTTP status of an upstream rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
