//! # Transport — Executing Constructed Calls
//!
//! The [`Transport`] trait is the seam between request construction and
//! request execution. The dispatcher builds an [`ApiCall`] and enqueues it
//! together with the caller's callback; the transport decides where and
//! when it runs and guarantees the callback fires exactly once.
//!
//! [`HttpTransport`] is the production implementation: a `reqwest::Client`
//! with the configured timeout, bound to a tokio runtime handle that
//! enqueued requests are spawned onto.
//!
//! ## Error Handling
//!
//! - Connect/TLS/timeout failures → [`MarvelApiError::Http`].
//! - Any non-2xx status → [`MarvelApiError::ApiError`] with the status and
//!   the raw body exactly as received. If that body cannot be read, the
//!   read failure is reported as [`MarvelApiError::Http`].
//! - Bodies that do not decode into the payload type →
//!   [`MarvelApiError::Deserialization`].
//!
//! Nothing is retried.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::runtime::Handle;
use url::Url;

use crate::call::ApiCall;
use crate::callback::{Delivery, ResultCallback};
use crate::config::MarvelApiConfig;
use crate::error::MarvelApiError;

/// Executes constructed calls asynchronously.
///
/// Implementations must be `Send + Sync` so one transport can serve every
/// concurrent caller of a shared dispatcher.
pub trait Transport: Send + Sync + 'static {
    /// Schedule `call` and deliver its outcome to `callback` exactly once.
    fn enqueue<T, C>(&self, call: ApiCall<T>, callback: C)
    where
        T: DeserializeOwned + Send + 'static,
        C: ResultCallback<T>;
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
    runtime: Handle,
}

impl HttpTransport {
    /// Create a transport bound to the tokio runtime of the calling context.
    ///
    /// # Errors
    ///
    /// Returns `MarvelApiError::ClientInit` when called outside a tokio
    /// runtime or when the HTTP client cannot be built.
    pub fn new(config: &MarvelApiConfig) -> Result<Self, MarvelApiError> {
        let runtime = Handle::try_current()
            .map_err(|e| MarvelApiError::ClientInit(format!("no tokio runtime: {e}")))?;
        Self::with_runtime(config, runtime)
    }

    /// Create a transport that spawns requests onto `runtime`.
    pub fn with_runtime(config: &MarvelApiConfig, runtime: Handle) -> Result<Self, MarvelApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MarvelApiError::ClientInit(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            runtime,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send `call` and decode the response, on the caller's task.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        call: &ApiCall<T>,
    ) -> Result<T, MarvelApiError> {
        send(&self.http, &self.base_url, call).await
    }
}

impl Transport for HttpTransport {
    fn enqueue<T, C>(&self, call: ApiCall<T>, callback: C)
    where
        T: DeserializeOwned + Send + 'static,
        C: ResultCallback<T>,
    {
        let http = self.http.clone();
        let base_url = self.base_url.clone();
        let delivery = Delivery::new(call.endpoint(), callback);

        self.runtime.spawn(async move {
            let result = send(&http, &base_url, &call).await;
            delivery.deliver(result);
        });
    }
}

async fn send<T: DeserializeOwned>(
    http: &reqwest::Client,
    base_url: &Url,
    call: &ApiCall<T>,
) -> Result<T, MarvelApiError> {
    let endpoint = call.endpoint();
    let url = base_url
        .join(call.path())
        .map_err(|e| MarvelApiError::Url {
            endpoint: endpoint.into(),
            source: e,
        })?;

    let resp = http
        .get(url)
        .query(call.query())
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(endpoint, "Marvel API request failed: {e}");
            MarvelApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            }
        })?;

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| {
            tracing::warn!(endpoint, status, "could not read error body: {e}");
            MarvelApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            }
        })?;
        tracing::warn!(endpoint, status, "Marvel API returned non-success status");
        return Err(MarvelApiError::ApiError {
            endpoint: endpoint.into(),
            status,
            body,
        });
    }

    let payload = resp
        .json()
        .await
        .map_err(|e| MarvelApiError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })?;
    Ok(payload)
}
