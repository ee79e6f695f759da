//! Command-line front end for the twitcher Helix client.
//!
//! Prints each operation's result as pretty JSON on stdout. Logs go to
//! stderr and are controlled with `RUST_LOG`.

mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;
use twitcher::Twitcher;

use config::{CliConfig, Overrides};

#[derive(Parser, Debug)]
#[command(name = "twitcher")]
#[command(about = "Query a handful of Twitch Helix endpoints")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Per-request timeout in seconds (overrides TWITCH_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Fetch a clip's broadcaster and creator at the same time
    #[arg(long)]
    concurrent_clip_lookups: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Request an app access token (client-credentials grant)
    Token,
    /// Look up a clip by URL, with its broadcaster and creator
    Clip {
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Look up a game by numeric id
    GameId {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Look up a game by exact name
    GameName {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Search channels
    Channels {
        #[arg(value_name = "QUERY")]
        query: String,
    },
    /// Look up a user by login name
    User {
        #[arg(value_name = "LOGIN")]
        login: String,
    },
    /// Look up a user by id
    UserId {
        #[arg(value_name = "ID")]
        id: String,
    },
}

fn to_json(value: impl Serialize) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(value)?)
}

async fn run(twitcher: &Twitcher, command: &Command) -> anyhow::Result<Value> {
    match command {
        Command::Token => to_json(twitcher.get_token().await?),
        Command::Clip { url } => to_json(twitcher.get_clip(url).await?),
        Command::GameId { id } => to_json(twitcher.get_game_by_id(id).await?),
        Command::GameName { name } => to_json(twitcher.get_game_by_name(name).await?),
        Command::Channels { query } => to_json(twitcher.search_channel(query).await?),
        Command::User { login } => to_json(twitcher.search_user_by_name(login).await?),
        Command::UserId { id } => to_json(twitcher.search_user_by_user_id(id).await?),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load(&Overrides {
        timeout_secs: cli.timeout_secs,
        concurrent_clip_lookups: cli.concurrent_clip_lookups,
    })?;
    let twitcher = config.build_client()?;

    tracing::debug!(command = ?cli.command, "Running command");
    let value = run(&twitcher, &cli.command)
        .await
        .context("Twitch request failed")?;

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
