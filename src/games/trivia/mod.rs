//! Multiple-choice trivia mini-game.
//!
//! A fixed 5x5 board of questions (five categories, values 200-1000).
//! Picking a question asks it; answering shows the result for a fixed
//! delay, then completes the question and returns to the board. Correct
//! answers add the question's value to the score; wrong answers cost
//! nothing. Completing all 25 questions ends the game.
//!
//! The completion delay uses the same epoch-guarded scheduled-effect
//! discipline as the word game: a stale timer firing after a reset must
//! not mutate the new game.

mod questions;

pub use questions::{Question, CATEGORIES, QUESTIONS, VALUES};

use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Delay between showing an answer's result and returning to the board.
pub const RESULT_DELAY: Duration = Duration::from_millis(3000);

/// Number of answer options per question.
pub const OPTIONS: usize = 3;

/// Phase of the trivia game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriviaPhase {
    /// Choosing a question from the board.
    Picking,
    /// A question is open; awaiting an answer.
    Asking {
        /// Index into [`QUESTIONS`].
        question: usize,
    },
    /// Result shown; completion pending the result delay.
    Showing {
        /// Index into [`QUESTIONS`].
        question: usize,
        /// The answer option that was picked.
        picked: usize,
        /// Whether the pick was correct.
        correct: bool,
    },
    /// All questions completed.
    Complete,
}

/// Delayed trivia effect, stamped with the game epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriviaScheduled {
    /// Delay from the moment of scheduling.
    pub delay: Duration,
    /// Epoch stamp checked by [`TriviaGame::finish_question`].
    pub epoch: u64,
}

/// State machine for one trivia game.
#[derive(Debug, Clone)]
pub struct TriviaGame {
    completed: [bool; QUESTIONS.len()],
    score: u32,
    phase: TriviaPhase,
    epoch: u64,
}

impl TriviaGame {
    /// Creates a fresh game with an untouched board and zero score.
    pub fn new() -> Self {
        Self {
            completed: [false; QUESTIONS.len()],
            score: 0,
            phase: TriviaPhase::Picking,
            epoch: 0,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> TriviaPhase {
        self.phase
    }

    /// Returns the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the question at the given index has been completed.
    pub fn is_completed(&self, question: usize) -> bool {
        self.completed[question]
    }

    /// Opens a question from the board.
    ///
    /// Ignored outside `Picking` or for completed questions.
    #[instrument(skip(self))]
    pub fn select(&mut self, question: usize) {
        if self.phase != TriviaPhase::Picking {
            debug!(phase = ?self.phase, "select ignored outside picking");
            return;
        }
        if question >= QUESTIONS.len() || self.completed[question] {
            debug!(question, "select ignored for completed or invalid question");
            return;
        }
        self.phase = TriviaPhase::Asking { question };
    }

    /// Answers the open question.
    ///
    /// Transitions to `Showing` and returns the scheduled completion
    /// effect; the driver calls [`Self::finish_question`] after the
    /// delay.
    #[instrument(skip(self))]
    pub fn answer(&mut self, picked: usize) -> Option<TriviaScheduled> {
        let TriviaPhase::Asking { question } = self.phase else {
            warn!(phase = ?self.phase, "answer with no open question");
            return None;
        };
        if picked >= OPTIONS {
            return None;
        }
        let correct = QUESTIONS[question].correct == picked;
        self.phase = TriviaPhase::Showing {
            question,
            picked,
            correct,
        };
        Some(TriviaScheduled {
            delay: RESULT_DELAY,
            epoch: self.epoch,
        })
    }

    /// Completes the question whose result is showing.
    ///
    /// Stale epochs (from before a reset) are dropped.
    #[instrument(skip(self))]
    pub fn finish_question(&mut self, epoch: u64) {
        if epoch != self.epoch {
            debug!(stamped = epoch, current = self.epoch, "dropping stale finish");
            return;
        }
        let TriviaPhase::Showing {
            question, correct, ..
        } = self.phase
        else {
            return;
        };
        self.completed[question] = true;
        if correct {
            self.score += QUESTIONS[question].value;
        }
        if self.completed.iter().all(|&done| done) {
            debug!(score = self.score, "trivia board complete");
            self.phase = TriviaPhase::Complete;
        } else {
            self.phase = TriviaPhase::Picking;
        }
    }

    /// Resets the game, invalidating any pending completion timer.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.completed = [false; QUESTIONS.len()];
        self.score = 0;
        self.phase = TriviaPhase::Picking;
    }
}

impl Default for TriviaGame {
    fn default() -> Self {
        Self::new()
    }
}
