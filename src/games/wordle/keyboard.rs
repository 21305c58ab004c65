//! Per-letter keyboard hint aggregation.

use super::types::LetterState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Strength ordering for the monotonic-upgrade rule.
fn priority(state: LetterState) -> u8 {
    match state {
        LetterState::Initial => 0,
        LetterState::Absent => 1,
        LetterState::Present => 2,
        LetterState::Correct => 3,
    }
}

/// Best-known classification per letter across all evaluated guesses.
///
/// Invariant: a letter's state only ever upgrades. `Correct` is never
/// downgraded to `Present` or `Absent`, and `Present` is never
/// downgraded to `Absent`; unset letters take whatever classification
/// first arrives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyboardState {
    states: HashMap<char, LetterState>,
}

impl KeyboardState {
    /// Creates an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the best-known state for a letter.
    pub fn get(&self, letter: char) -> LetterState {
        self.states.get(&letter).copied().unwrap_or_default()
    }

    /// Folds one evaluated letter into the aggregate.
    pub fn absorb(&mut self, letter: char, state: LetterState) {
        let entry = self.states.entry(letter).or_default();
        if priority(state) > priority(*entry) {
            *entry = state;
        }
    }
}
