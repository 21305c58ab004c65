//! Guesswork - Unified CLI
//!
//! Word-guessing game server and terminal clients.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use guesswork::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, host } => run_server(host, port).await,
        Command::Play {
            server_url,
            post_id,
            user,
        } => guesswork::run_game(server_url, post_id, user).await,
        Command::Trivia => guesswork::run_trivia().await,
    }
}

/// Run the HTTP game server
async fn run_server(host: String, port: u16) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(host, port, "Starting guesswork server");

    guesswork::serve(&host, port, AppState::new()).await
}
