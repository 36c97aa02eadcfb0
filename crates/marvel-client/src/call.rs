//! # Constructed Requests
//!
//! `ApiCall<T>` is a fully described GET request: a path relative to the
//! configured base URL, ordered query parameters, and the payload type `T`
//! the response decodes into. Transports execute it; tests inspect it.

use std::marker::PhantomData;

use marvel_crypto::AuthToken;

/// Query parameter carrying the public key.
pub const PARAM_API_KEY: &str = "apikey";
/// Query parameter carrying the request timestamp.
pub const PARAM_TS: &str = "ts";
/// Query parameter carrying the auth hash.
pub const PARAM_HASH: &str = "hash";

/// A constructed, ready-to-send API request.
pub struct ApiCall<T> {
    endpoint: String,
    path: String,
    query: Vec<(&'static str, String)>,
    _payload: PhantomData<fn() -> T>,
}

impl<T> ApiCall<T> {
    /// Start a GET request. `endpoint` is the label used in errors and logs.
    pub(crate) fn get(endpoint: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            path: path.into(),
            query: Vec::new(),
            _payload: PhantomData,
        }
    }

    pub(crate) fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }

    pub(crate) fn params(
        mut self,
        pairs: impl IntoIterator<Item = (&'static str, String)>,
    ) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Attach `apikey`, `ts`, and `hash`. `ts` and `hash` both come from the
    /// same token.
    pub(crate) fn authenticate(self, public_key: &str, token: &AuthToken) -> Self {
        self.param(PARAM_API_KEY, public_key)
            .param(PARAM_TS, token.timestamp().to_string())
            .param(PARAM_HASH, token.hash())
    }

    /// Label such as `GET /characters/{id}/comics`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Path relative to the base URL, without a leading slash.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in the order they will be sent.
    pub fn query(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// First value of the named query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl<T> Clone for ApiCall<T> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            path: self.path.clone(),
            query: self.query.clone(),
            _payload: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for ApiCall<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCall")
            .field("endpoint", &self.endpoint)
            .field("path", &self.path)
            .field("query", &self.query)
            .finish()
    }
}
