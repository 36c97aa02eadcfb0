//! # marvel — Marvel Comics API CLI
//!
//! Reads `MARVEL_PUBLIC_KEY`, `MARVEL_PRIVATE_KEY`, and optionally
//! `MARVEL_BASE_URL` / `MARVEL_TIMEOUT_SECS` from the environment.
//!
//! ```text
//! marvel characters --search spider --limit 20
//! marvel character 1009610
//! marvel comics 1009610 --offset 0 --limit 10
//! ```

use clap::{Parser, Subcommand};
use marvel_cli::characters::{self, CharacterArgs, CharactersArgs};
use marvel_cli::comics::{self, ComicListArgs};
use marvel_cli::render;
use marvel_client::{global, ComicKind, Dispatcher};

/// Browse Marvel characters and the comics, series, stories, and events
/// they appear in.
#[derive(Parser, Debug)]
#[command(name = "marvel", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List characters, optionally filtered by name prefix.
    Characters(CharactersArgs),
    /// Fetch a single character by id.
    Character(CharacterArgs),
    /// List comics featuring a character.
    Comics(ComicListArgs),
    /// List series featuring a character.
    Series(ComicListArgs),
    /// List stories featuring a character.
    Stories(ComicListArgs),
    /// List events featuring a character.
    Events(ComicListArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "dispatching");
    let dispatcher = global()?;

    let output = match &cli.command {
        Commands::Characters(args) => render(&characters::list(dispatcher, args).await?)?,
        Commands::Character(args) => render(&characters::get(dispatcher, args).await?)?,
        Commands::Comics(args) => list_kind(dispatcher, ComicKind::Comics, args).await?,
        Commands::Series(args) => list_kind(dispatcher, ComicKind::Series, args).await?,
        Commands::Stories(args) => list_kind(dispatcher, ComicKind::Stories, args).await?,
        Commands::Events(args) => list_kind(dispatcher, ComicKind::Events, args).await?,
    };
    println!("{output}");
    Ok(())
}

async fn list_kind(
    dispatcher: &Dispatcher,
    kind: ComicKind,
    args: &ComicListArgs,
) -> anyhow::Result<String> {
    render(&comics::list(dispatcher, kind, args).await?)
}
