//! # Process-Wide Dispatcher
//!
//! [`global()`] returns one shared [`Dispatcher`], built from the
//! environment on first access. The cell is a `once_cell::sync::OnceCell`,
//! so concurrent first callers block on one initializer instead of each
//! building their own transport.
//!
//! A failed construction is not cached; the next call tries again.

use once_cell::sync::OnceCell;

use crate::config::{ConfigError, MarvelApiConfig};
use crate::dispatcher::Dispatcher;
use crate::error::MarvelApiError;

static GLOBAL: OnceCell<Dispatcher> = OnceCell::new();

/// The process-wide dispatcher, configured from the environment.
///
/// The first successful call must happen inside a tokio runtime; the
/// dispatcher's transport spawns requests onto that runtime for the rest
/// of the process. If the runtime shuts down, later requests complete
/// with [`MarvelApiError::Cancelled`].
///
/// # Errors
///
/// Returns `MarvelApiError::Config` if required variables are missing and
/// `MarvelApiError::ClientInit` when called outside a runtime.
pub fn global() -> Result<&'static Dispatcher, MarvelApiError> {
    get_or_build(&GLOBAL, MarvelApiConfig::from_env)
}

fn get_or_build<F>(cell: &OnceCell<Dispatcher>, load: F) -> Result<&Dispatcher, MarvelApiError>
where
    F: FnOnce() -> Result<MarvelApiConfig, ConfigError>,
{
    cell.get_or_try_init(|| {
        let config = load()?;
        tracing::info!(base_url = %config.base_url, "initializing Marvel API dispatcher");
        Dispatcher::new(config)
    })
}
