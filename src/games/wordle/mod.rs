//! Word-guessing game: core types, guess evaluation, and the client-side
//! guess/reveal state machine.

mod evaluate;
mod keyboard;
mod session;
mod types;

pub use evaluate::{Evaluation, evaluate};
pub use keyboard::KeyboardState;
pub use session::{
    Action, Effect, GuessResult, GuessSession, Key, Phase, Scheduled, MESSAGE_DURATION,
    REVEAL_DELAY, SHAKE_DURATION,
};
pub use types::{Board, LetterState, Tile, Word, WordError, MAX_GUESSES, WORD_LENGTH};
