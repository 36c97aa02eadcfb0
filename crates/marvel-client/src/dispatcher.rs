//! # Request Dispatcher
//!
//! Single access point for every fetchable resource.
//!
//! ## Paths
//!
//! | Operation | Path (relative to base URL) | Query |
//! |-----------|-----------------------------|-------|
//! | `list_characters` | `characters` | `offset`, `limit`, `nameStartsWith` |
//! | `get_character` | `characters/{id}` | |
//! | `list_comics` | `characters/{id}/comics` | `offset`, `limit` |
//! | `list_series` | `characters/{id}/series` | `offset`, `limit` |
//! | `list_stories` | `characters/{id}/stories` | `offset`, `limit` |
//! | `list_events` | `characters/{id}/events` | `offset`, `limit` |
//!
//! Every call additionally carries `apikey`, `ts`, and `hash`.
//!
//! ## Concurrency
//!
//! The dispatcher holds no per-request state. Timestamp, token, and call
//! are built on the caller's stack, so a shared `&Dispatcher` needs no
//! locking.

use marvel_core::{CharacterId, ComicKind, Paging};
use marvel_crypto::AuthTokenBuilder;

use crate::call::ApiCall;
use crate::callback::ResultCallback;
use crate::config::MarvelApiConfig;
use crate::error::MarvelApiError;
use crate::models::{CharacterDataWrapper, ComicDataWrapper};
use crate::transport::{HttpTransport, Transport};

/// Query parameter for the character name-prefix filter.
const PARAM_NAME_STARTS_WITH: &str = "nameStartsWith";

/// Facade over the API: one method per resource.
#[derive(Debug)]
pub struct Dispatcher<T: Transport = HttpTransport> {
    auth: AuthTokenBuilder,
    transport: T,
}

impl Dispatcher<HttpTransport> {
    /// Create a dispatcher with an HTTP transport bound to the current
    /// tokio runtime.
    pub fn new(config: MarvelApiConfig) -> Result<Self, MarvelApiError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(AuthTokenBuilder::new(config.credentials), transport))
    }
}

impl<T: Transport> Dispatcher<T> {
    pub fn with_transport(auth: AuthTokenBuilder, transport: T) -> Self {
        Self { auth, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// List characters, optionally filtered to names starting with
    /// `search_query`.
    pub fn list_characters<C>(&self, paging: Paging, search_query: Option<&str>, callback: C)
    where
        C: ResultCallback<CharacterDataWrapper>,
    {
        let mut call = ApiCall::get("GET /characters", "characters").params(paging.query_pairs());
        if let Some(query) = search_query {
            call = call.param(PARAM_NAME_STARTS_WITH, query);
        }
        self.dispatch(call, callback);
    }

    /// Fetch one character. The API still answers with a one-element list.
    pub fn get_character<C>(&self, id: CharacterId, callback: C)
    where
        C: ResultCallback<CharacterDataWrapper>,
    {
        let call = ApiCall::get("GET /characters/{id}", format!("characters/{id}"));
        self.dispatch(call, callback);
    }

    pub fn list_comics<C>(&self, id: CharacterId, paging: Paging, callback: C)
    where
        C: ResultCallback<ComicDataWrapper>,
    {
        self.dispatch(comic_list_by_kind(id, ComicKind::Comics, paging), callback);
    }

    pub fn list_series<C>(&self, id: CharacterId, paging: Paging, callback: C)
    where
        C: ResultCallback<ComicDataWrapper>,
    {
        self.dispatch(comic_list_by_kind(id, ComicKind::Series, paging), callback);
    }

    pub fn list_stories<C>(&self, id: CharacterId, paging: Paging, callback: C)
    where
        C: ResultCallback<ComicDataWrapper>,
    {
        self.dispatch(comic_list_by_kind(id, ComicKind::Stories, paging), callback);
    }

    pub fn list_events<C>(&self, id: CharacterId, paging: Paging, callback: C)
    where
        C: ResultCallback<ComicDataWrapper>,
    {
        self.dispatch(comic_list_by_kind(id, ComicKind::Events, paging), callback);
    }

    /// List any comic-family resource by kind.
    pub fn list_by_kind<C>(&self, id: CharacterId, kind: ComicKind, paging: Paging, callback: C)
    where
        C: ResultCallback<ComicDataWrapper>,
    {
        self.dispatch(comic_list_by_kind(id, kind, paging), callback);
    }

    /// Stamp a fresh token onto `call` and hand it to the transport.
    fn dispatch<P, C>(&self, call: ApiCall<P>, callback: C)
    where
        P: serde::de::DeserializeOwned + Send + 'static,
        C: ResultCallback<P>,
    {
        let token = self.auth.fresh_token();
        let call = call.authenticate(self.auth.public_key(), &token);
        if token.is_degraded() {
            tracing::warn!(endpoint = call.endpoint(), "sending with empty auth hash");
        }
        tracing::debug!(
            endpoint = call.endpoint(),
            path = call.path(),
            ts = %token.timestamp(),
            "dispatching Marvel API request"
        );
        self.transport.enqueue(call, callback);
    }
}

/// Shared request shape for the four comic-family lists.
fn comic_list_by_kind(
    id: CharacterId,
    kind: ComicKind,
    paging: Paging,
) -> ApiCall<ComicDataWrapper> {
    let segment = kind.as_path_segment();
    ApiCall::get(
        format!("GET /characters/{{id}}/{segment}"),
        format!("characters/{id}/{segment}"),
    )
    .params(paging.query_pairs())
}
