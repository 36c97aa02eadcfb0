//! # marvel-cli — Command-Line Interface
//!
//! Thin clap front end over [`marvel_client::Dispatcher`]. Each subcommand
//! maps onto exactly one dispatcher operation and prints the response
//! envelope as pretty JSON.
//!
//! ## Subcommands
//!
//! - `characters` — paged character list with optional name-prefix search
//! - `character` — one character by id
//! - `comics`, `series`, `stories`, `events` — comic-family lists for a
//!   character
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from dispatch.
//! - No request construction here; that belongs to `marvel-client`.

pub mod characters;
pub mod comics;

use anyhow::Context;
use marvel_client::{MarvelApiError, Paging};
use tokio::sync::oneshot;

/// Paging flags shared by every list subcommand.
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct PagingArgs {
    /// Skip this many results.
    #[arg(long)]
    pub offset: Option<u32>,
    /// Return at most this many results (the API accepts 1..=100).
    #[arg(long)]
    pub limit: Option<u32>,
}

impl From<PagingArgs> for Paging {
    fn from(args: PagingArgs) -> Self {
        Paging {
            offset: args.offset,
            limit: args.limit,
        }
    }
}

/// Wait for a dispatched request's callback to fire.
pub(crate) async fn await_reply<T>(
    rx: oneshot::Receiver<Result<T, MarvelApiError>>,
) -> anyhow::Result<T> {
    let result = rx.await.context("request was dropped without a result")?;
    Ok(result?)
}

/// Render a response envelope for stdout.
pub fn render<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("failed to render response as JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        paging: PagingArgs,
    }

    #[test]
    fn paging_flags_map_to_paging() {
        let cli = TestCli::try_parse_from(["marvel", "--offset", "20", "--limit", "10"]).unwrap();
        assert_eq!(Paging::from(cli.paging), Paging::new(20, 10));
    }

    #[test]
    fn absent_paging_flags_stay_absent() {
        let cli = TestCli::try_parse_from(["marvel"]).unwrap();
        assert_eq!(Paging::from(cli.paging), Paging::default());
    }

    #[test]
    fn negative_limit_is_rejected_by_parser() {
        assert!(TestCli::try_parse_from(["marvel", "--limit", "-1"]).is_err());
    }

    #[tokio::test]
    async fn await_reply_propagates_api_error() {
        let (tx, rx) = oneshot::channel::<Result<(), MarvelApiError>>();
        tx.send(Err(MarvelApiError::ApiError {
            endpoint: "GET /characters".into(),
            status: 409,
            body: "Invalid Hash".into(),
        }))
        .unwrap();
        let err = await_reply(rx).await.unwrap_err();
        assert!(err.to_string().contains("409"));
    }

    #[tokio::test]
    async fn await_reply_reports_dropped_sender() {
        let (tx, rx) = oneshot::channel::<Result<(), MarvelApiError>>();
        drop(tx);
        let err = await_reply(rx).await.unwrap_err();
        assert!(err.to_string().contains("dropped"));
    }

    #[test]
    fn render_pretty_prints() {
        let out = render(&serde_json::json!({"a": 1})).unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}");
    }
}
