//! Movie Queue bot
//!
//! Answers queue commands in Telegram chats and posts the scheduled polls.
//!
//! ## Usage
//!
//! ```text
//! moviequeue-bot [--config moviequeue.toml] [run]
//! moviequeue-bot poll
//! moviequeue-bot participation-poll
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod poll;
mod runner;
mod telegram;

use config::Config;

#[derive(Parser)]
#[command(name = "moviequeue-bot")]
#[command(version, about = "Telegram bot for the shared movie queue", long_about = None)]
struct Cli {
    /// Optional TOML config; environment variables take precedence
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer chat commands until interrupted (default)
    Run,
    /// Post the movie poll to the configured chat
    Poll,
    /// Post the participation poll to the configured chat
    ParticipationPoll,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,moviequeue=debug"),
    )
    .target(env_logger::Target::Stderr)
    .init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => runner::run_bot(&config).await,
        Commands::Poll => runner::send_movie_poll(&config).await,
        Commands::ParticipationPoll => runner::send_participation_poll(&config).await,
    }
}
