//! Terminal client for the word game and the trivia mini-game.

mod app;
mod http_client;
mod input;
mod trivia;
mod ui;

pub use http_client::GameClient;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::{error, info};

/// Sets up logging to a file so tracing output does not tear the TUI.
fn init_tui_logging(path: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Runs the word-game client against a running server.
pub async fn run_game(server_url: String, post_id: String, user_id: String) -> Result<()> {
    init_tui_logging("guesswork_tui.log")?;
    info!(server_url, post_id, "starting word game client");

    let client = GameClient::new(server_url, post_id, user_id);
    client.init().await?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app::run(&mut terminal, client).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = ?err, "word game client error");
    }
    result
}

/// Runs the local trivia mini-game.
pub async fn run_trivia() -> Result<()> {
    init_tui_logging("guesswork_trivia.log")?;
    info!("starting trivia client");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = trivia::run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = ?err, "trivia client error");
    }
    result
}
