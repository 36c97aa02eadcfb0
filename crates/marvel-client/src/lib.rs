//! # marvel-client -- Typed Rust client for the Marvel Comics API
//!
//! Provides authenticated, typed access to the public API's character
//! resources:
//! - **Characters** via `GET /v1/public/characters` (paged, name filter)
//! - **Character** via `GET /v1/public/characters/{id}`
//! - **Comic family** via `GET /v1/public/characters/{id}/{kind}` where
//!   `kind` is one of comics, series, stories, events
//!
//! ## Architecture
//!
//! [`Dispatcher`] is the single access point. Each operation captures a
//! fresh timestamp, derives the auth hash for it, builds an [`ApiCall`]
//! carrying `apikey`, `ts`, and `hash`, and hands the call plus the
//! caller's [`ResultCallback`] to a [`Transport`]. The dispatcher never
//! inspects the outcome: transport errors, upstream rejections, and decode
//! failures all reach the callback untouched.
//!
//! No retries, caching, or deduplication happen in this crate.
//!
//! ## Wiring
//!
//! Prefer constructing one [`Dispatcher`] at startup and passing it (or an
//! `Arc` of it) to consumers. [`global()`] exists for call sites that need
//! a lazily built process-wide instance.

pub mod call;
pub mod callback;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod global;
pub mod models;
pub mod transport;

pub use call::ApiCall;
pub use callback::{reply_channel, ResultCallback};
pub use config::{ConfigError, MarvelApiConfig};
pub use dispatcher::Dispatcher;
pub use error::MarvelApiError;
pub use global::global;
pub use models::{CharacterDataWrapper, ComicDataWrapper};
pub use transport::{HttpTransport, Transport};

pub use marvel_core::{CharacterId, ComicKind, Paging, Timestamp};
pub use marvel_crypto::{AuthCredentials, AuthToken, AuthTokenBuilder};
