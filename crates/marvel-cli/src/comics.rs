//! # Comic-Family Subcommands
//!
//! `comics`, `series`, `stories`, and `events` share one argument shape and
//! one handler; the subcommand picks the [`ComicKind`].

use clap::Args;
use marvel_client::models::ComicDataWrapper;
use marvel_client::{reply_channel, CharacterId, ComicKind, Dispatcher, Transport};

use crate::{await_reply, PagingArgs};

/// Arguments for the comic-family subcommands.
#[derive(Args, Debug)]
pub struct ComicListArgs {
    /// Character id, e.g. 1009610.
    pub id: CharacterId,
    #[command(flatten)]
    pub paging: PagingArgs,
}

pub async fn list<T: Transport>(
    dispatcher: &Dispatcher<T>,
    kind: ComicKind,
    args: &ComicListArgs,
) -> anyhow::Result<ComicDataWrapper> {
    let (callback, rx) = reply_channel();
    dispatcher.list_by_kind(args.id, kind, args.paging.into(), callback);
    await_reply(rx).await
}
