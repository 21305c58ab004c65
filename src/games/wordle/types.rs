//! Core domain types for the word-guessing game.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of letters in a word.
pub const WORD_LENGTH: usize = 5;

/// Number of guess rows on the board.
pub const MAX_GUESSES: usize = 6;

/// Per-letter verdict for an evaluated guess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    /// Not yet evaluated.
    #[default]
    Initial,
    /// Letter matches the secret word at this exact position.
    Correct,
    /// Letter appears elsewhere in the secret word, not yet matched.
    Present,
    /// Letter does not appear, after accounting for matched duplicates.
    Absent,
}

/// Errors from constructing a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WordError {
    /// Input was not exactly [`WORD_LENGTH`] characters.
    #[display("word must be exactly {WORD_LENGTH} letters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// Input contained a character outside a-z.
    #[display("word must contain only letters a-z")]
    InvalidCharacter,
}

/// A validated 5-letter lowercase word.
///
/// Used for both the secret word and submitted guesses; construction
/// through [`FromStr`] guarantees the length and character invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Returns the letters as lowercase ASCII bytes.
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Returns the letter at the given position as a char.
    pub fn letter(&self, index: usize) -> char {
        self.0[index] as char
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        let bytes = lower.as_bytes();
        if bytes.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(lower.chars().count()));
        }
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, &b) in letters.iter_mut().zip(bytes) {
            if !b.is_ascii_lowercase() {
                return Err(WordError::InvalidCharacter);
            }
            *slot = b;
        }
        Ok(Self(letters))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl Serialize for Word {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Word {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// One cell of the guess board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// The entered letter, if any.
    pub letter: Option<char>,
    /// Classification of the letter after evaluation.
    pub state: LetterState,
}

/// The 6x5 guess board.
///
/// Rows before the current row are immutable once evaluated; rows after
/// the current row are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: [[Tile; WORD_LENGTH]; MAX_GUESSES],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            rows: [[Tile::default(); WORD_LENGTH]; MAX_GUESSES],
        }
    }

    /// Gets the tile at the given row and column.
    pub fn tile(&self, row: usize, col: usize) -> &Tile {
        &self.rows[row][col]
    }

    /// Returns one row of tiles.
    pub fn row(&self, row: usize) -> &[Tile; WORD_LENGTH] {
        &self.rows[row]
    }

    /// Sets the letter of a tile, resetting its state.
    pub fn set_letter(&mut self, row: usize, col: usize, letter: Option<char>) {
        self.rows[row][col] = Tile {
            letter,
            state: LetterState::Initial,
        };
    }

    /// Sets the evaluated state of a tile.
    pub fn set_state(&mut self, row: usize, col: usize, state: LetterState) {
        self.rows[row][col].state = state;
    }

    /// Concatenates the letters entered in a row.
    pub fn row_text(&self, row: usize) -> String {
        self.rows[row].iter().filter_map(|tile| tile.letter).collect()
    }

    /// Formats evaluated rows up to `last_row` as an emoji share grid.
    pub fn share_grid(&self, last_row: usize) -> String {
        let mut grid = String::new();
        for row in self.rows.iter().take(last_row + 1) {
            if !grid.is_empty() {
                grid.push('\n');
            }
            for tile in row {
                grid.push_str(match tile.state {
                    LetterState::Correct => "\u{1f7e9}",
                    LetterState::Present => "\u{1f7e8}",
                    LetterState::Absent => "\u{2b1c}",
                    LetterState::Initial => " ",
                });
            }
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_validation() {
        assert!("crane".parse::<Word>().is_ok());
        assert_eq!("CRANE".parse::<Word>().unwrap().to_string(), "crane");
        assert_eq!(
            "cran".parse::<Word>(),
            Err(WordError::InvalidLength(4))
        );
        assert_eq!(
            "too long".parse::<Word>(),
            Err(WordError::InvalidLength(8))
        );
        assert_eq!("cr4ne".parse::<Word>(), Err(WordError::InvalidCharacter));
    }

    #[test]
    fn test_word_serde_round_trip() {
        let word: Word = "slate".parse().unwrap();
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, "\"slate\"");
        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);
    }

    #[test]
    fn test_board_row_text() {
        let mut board = Board::new();
        for (i, letter) in "crane".chars().enumerate() {
            board.set_letter(0, i, Some(letter));
        }
        assert_eq!(board.row_text(0), "crane");
        assert_eq!(board.row_text(1), "");
    }

    #[test]
    fn test_share_grid_marks_states() {
        let mut board = Board::new();
        for (i, letter) in "slate".chars().enumerate() {
            board.set_letter(0, i, Some(letter));
        }
        board.set_state(0, 0, LetterState::Absent);
        board.set_state(0, 1, LetterState::Present);
        board.set_state(0, 2, LetterState::Correct);
        board.set_state(0, 3, LetterState::Absent);
        board.set_state(0, 4, LetterState::Correct);
        assert_eq!(
            board.share_grid(0),
            "\u{2b1c}\u{1f7e8}\u{1f7e9}\u{2b1c}\u{1f7e9}"
        );
    }
}
