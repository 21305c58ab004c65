//! Command-line interface for guesswork.

use clap::{Parser, Subcommand};

/// Guesswork - a daily word-guessing game
#[derive(Parser, Debug)]
#[command(name = "guesswork")]
#[command(about = "Word-guessing game server and terminal client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Play the word game in the terminal against a server
    Play {
        /// Game server URL
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        server_url: String,

        /// Post to play (one secret word per post)
        #[arg(long, default_value = "local")]
        post_id: String,

        /// Player identity sent with each request
        #[arg(long, default_value = "player")]
        user: String,
    },

    /// Play the trivia mini-game in the terminal
    Trivia,
}
