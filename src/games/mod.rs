//! Game implementations.

pub mod trivia;
pub mod wordle;
