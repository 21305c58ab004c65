//! Guesswork library - a daily word-guessing game
//!
//! This library provides the full stack for a Wordle-style guessing
//! game: the guess evaluator, a session state machine driving the
//! board, an HTTP API server, and a terminal client. A small trivia
//! mini-game rides along.
//!
//! # Architecture
//!
//! - **Games**: The guess evaluator, session state machine, and trivia board
//! - **Server**: Axum HTTP API serving init/check/reveal for game posts
//! - **Store**: Per-post configuration (the word of the day)
//! - **Tui**: Terminal client talking to the server over HTTP
//!
//! # Example
//!
//! ```
//! use guesswork::{evaluate, LetterState, Word};
//!
//! let secret: Word = "crane".parse()?;
//! let guess: Word = "slate".parse()?;
//! let result = evaluate(&secret, &guess);
//! assert_eq!(result.states[2], LetterState::Correct);
//! # Ok::<(), guesswork::WordError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod games;
mod server;
mod store;
mod tui;
mod words;

// Crate-level exports - Wire types
pub use api::{CheckRequest, CheckResponse, InitResponse, RevealResponse};

// Crate-level exports - Word game
pub use games::wordle::{
    evaluate, Action, Board, Effect, Evaluation, GuessResult, GuessSession, Key, KeyboardState,
    LetterState, Phase, Scheduled, Tile, Word, WordError, MAX_GUESSES, MESSAGE_DURATION,
    REVEAL_DELAY, SHAKE_DURATION, WORD_LENGTH,
};

// Crate-level exports - Trivia mini-game
pub use games::trivia::{
    Question, TriviaGame, TriviaPhase, TriviaScheduled, CATEGORIES, OPTIONS, QUESTIONS,
    RESULT_DELAY, VALUES,
};

// Crate-level exports - Server
pub use server::{router, serve, ApiError, AppState, RequestContext};

// Crate-level exports - Configuration store
pub use store::{config_key, ConfigStore, PostConfig, StoreError};

// Crate-level exports - Terminal client
pub use tui::{run_game, run_trivia, GameClient};

// Crate-level exports - Word lists
pub use words::{is_allowed, word_of_the_day, ALLOWED, ANSWERS};
