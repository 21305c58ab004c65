//! Server-side guess evaluation.
//!
//! Pure and stateless; safe to call concurrently for different sessions.

use super::types::{LetterState, Word, WORD_LENGTH};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of evaluating one guess against the secret word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Per-position classification.
    pub states: [LetterState; WORD_LENGTH],
    /// True only if every position matched exactly.
    pub solved: bool,
}

/// Evaluates a guess letter by letter against the secret word.
///
/// Duplicate letters are handled by consuming secret letters: each
/// secret letter credits at most one guess letter, exact matches are
/// consumed first, and earlier guess positions win ties on present
/// matches.
#[instrument(level = "debug")]
pub fn evaluate(secret: &Word, guess: &Word) -> Evaluation {
    let mut states = [LetterState::Initial; WORD_LENGTH];
    // Secret letters not yet credited to a guess letter.
    let mut remaining: [Option<u8>; WORD_LENGTH] = secret.letters().map(Some);
    let mut solved = true;

    // Pass 1: exact matches.
    for i in 0..WORD_LENGTH {
        if guess.letters()[i] == secret.letters()[i] {
            states[i] = LetterState::Correct;
            remaining[i] = None;
        } else {
            solved = false;
        }
    }

    // Pass 2: present matches, consuming leftmost remaining duplicates.
    for i in 0..WORD_LENGTH {
        if states[i] == LetterState::Initial {
            let wanted = guess.letters()[i];
            if let Some(j) = remaining.iter().position(|&left| left == Some(wanted)) {
                states[i] = LetterState::Present;
                remaining[j] = None;
            }
        }
    }

    // Pass 3: everything else is absent.
    for state in &mut states {
        if *state == LetterState::Initial {
            *state = LetterState::Absent;
        }
    }

    Evaluation { states, solved }
}
