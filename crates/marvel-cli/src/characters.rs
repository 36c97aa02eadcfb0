//! # Character Subcommands
//!
//! `characters` lists characters; `character` fetches one by id.

use clap::Args;
use marvel_client::models::CharacterDataWrapper;
use marvel_client::{reply_channel, CharacterId, Dispatcher, Transport};

use crate::{await_reply, PagingArgs};

/// Arguments for the `characters` subcommand.
#[derive(Args, Debug)]
pub struct CharactersArgs {
    #[command(flatten)]
    pub paging: PagingArgs,
    /// Only characters whose name starts with this text.
    #[arg(long)]
    pub search: Option<String>,
}

/// Arguments for the `character` subcommand.
#[derive(Args, Debug)]
pub struct CharacterArgs {
    /// Character id, e.g. 1009610.
    pub id: CharacterId,
}

pub async fn list<T: Transport>(
    dispatcher: &Dispatcher<T>,
    args: &CharactersArgs,
) -> anyhow::Result<CharacterDataWrapper> {
    let (callback, rx) = reply_channel();
    dispatcher.list_characters(args.paging.into(), args.search.as_deref(), callback);
    await_reply(rx).await
}

pub async fn get<T: Transport>(
    dispatcher: &Dispatcher<T>,
    args: &CharacterArgs,
) -> anyhow::Result<CharacterDataWrapper> {
    let (callback, rx) = reply_channel();
    dispatcher.get_character(args.id, callback);
    await_reply(rx).await
}
