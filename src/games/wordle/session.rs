//! Client-side guess-submission state machine.
//!
//! `GuessSession` owns the board, cursor, keyboard aggregate, and
//! UI-timing state. Transitions never perform I/O: they return explicit
//! [`Action`]s for the driver to carry out (submit a guess over the
//! network, schedule a delayed [`Effect`], fetch the secret word for the
//! game-over reveal).
//!
//! Every scheduled effect carries the session epoch captured when it was
//! scheduled. Applying an evaluation result or error bumps the epoch, so
//! a timer that fires after a later state change is dropped instead of
//! corrupting newer state.

use super::keyboard::KeyboardState;
use super::types::{Board, LetterState, Word, MAX_GUESSES, WORD_LENGTH};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Delay before reveal-driven transitions (victory message, row unlock,
/// game-over message).
pub const REVEAL_DELAY: Duration = Duration::from_millis(1600);

/// Lifetime of transient messages.
pub const MESSAGE_DURATION: Duration = Duration::from_millis(2000);

/// Lifetime of the row shake signal.
pub const SHAKE_DURATION: Duration = Duration::from_millis(1000);

/// Victory messages indexed by the row the puzzle was solved on.
const VICTORY: [&str; MAX_GUESSES] = [
    "Genius",
    "Magnificent",
    "Impressive",
    "Splendid",
    "Great",
    "Phew",
];

/// Phase of the guess session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Input allowed.
    Idle,
    /// A submit is in flight; input locked.
    AwaitingResult,
    /// Brief locked transition after a non-terminal evaluated guess.
    RowAdvancing,
    /// Terminal: puzzle solved.
    Solved,
    /// Terminal: all rows used without solving.
    Exhausted,
}

/// A keyboard input for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A letter a-z.
    Letter(char),
    /// Remove the letter before the cursor.
    Backspace,
    /// Submit the current row.
    Enter,
}

/// Delayed effect to apply after its scheduled delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Clear a transient message.
    ClearMessage,
    /// Clear the shake signal.
    ClearShake,
    /// Return from `RowAdvancing` to `Idle`.
    Unlock,
    /// Show the persistent victory message.
    ShowVictory,
    /// Show the persistent game-over message.
    ShowGameOver,
}

/// An effect scheduled for later application, stamped with the session
/// epoch at scheduling time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    /// Delay from the moment of scheduling.
    pub delay: Duration,
    /// The effect to apply.
    pub effect: Effect,
    /// Epoch stamp; stale stamps are dropped by [`GuessSession::apply_effect`].
    pub epoch: u64,
}

/// Instruction for the driver produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Send this guess to the evaluator.
    Submit(Word),
    /// Apply the effect after its delay.
    Schedule(Scheduled),
    /// Fetch the secret word for the game-over message.
    Reveal,
}

/// Successful evaluation payload, as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessResult {
    /// Whether the guess is a recognized dictionary word.
    pub exists: bool,
    /// Whether the guess matched the secret word exactly.
    pub solved: bool,
    /// Per-position classification.
    pub states: [LetterState; WORD_LENGTH],
}

/// Message banner shown above the board.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Banner {
    text: String,
    sticky: bool,
}

/// Client-side state machine for one game.
#[derive(Debug, Clone)]
pub struct GuessSession {
    board: Board,
    row: usize,
    col: usize,
    keyboard: KeyboardState,
    phase: Phase,
    banner: Option<Banner>,
    shake_row: Option<usize>,
    revealed: Option<Word>,
    epoch: u64,
}

impl GuessSession {
    /// Creates a fresh session at row 0 with an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            row: 0,
            col: 0,
            keyboard: KeyboardState::new(),
            phase: Phase::Idle,
            banner: None,
            shake_row: None,
            revealed: None,
            epoch: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the cursor column within the current row.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the keyboard hint aggregate.
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Returns the currently displayed message, if any.
    pub fn message(&self) -> Option<&str> {
        self.banner.as_ref().map(|banner| banner.text.as_str())
    }

    /// Returns the row currently signalling a shake, if any.
    pub fn shake_row(&self) -> Option<usize> {
        self.shake_row
    }

    /// Handles a keyboard input.
    ///
    /// Ignored whenever the session is not `Idle`, including the
    /// terminal phases.
    #[instrument(skip(self), fields(phase = ?self.phase, row = self.row, col = self.col))]
    pub fn handle_key(&mut self, key: Key) -> Vec<Action> {
        if self.phase != Phase::Idle {
            debug!("input ignored while locked");
            return Vec::new();
        }

        match key {
            Key::Letter(letter) if letter.is_ascii_alphabetic() => {
                if self.col < WORD_LENGTH {
                    let letter = letter.to_ascii_lowercase();
                    self.board.set_letter(self.row, self.col, Some(letter));
                    self.col += 1;
                }
                Vec::new()
            }
            Key::Letter(_) => Vec::new(),
            Key::Backspace => {
                if self.col > 0 {
                    self.col -= 1;
                    self.board.set_letter(self.row, self.col, None);
                }
                Vec::new()
            }
            Key::Enter => self.submit(),
        }
    }

    /// Applies a transport or server error for the in-flight guess.
    ///
    /// The attempt is not consumed; input unlocks.
    #[instrument(skip(self))]
    pub fn apply_error(&mut self, message: &str) -> Vec<Action> {
        if self.phase != Phase::AwaitingResult {
            warn!(phase = ?self.phase, "error response with no guess in flight");
            return Vec::new();
        }
        self.bump();
        self.phase = Phase::Idle;
        self.transient(message)
    }

    /// Applies the evaluation result for the in-flight guess.
    #[instrument(skip(self), fields(row = self.row))]
    pub fn apply_check(&mut self, result: &GuessResult) -> Vec<Action> {
        if self.phase != Phase::AwaitingResult {
            warn!(phase = ?self.phase, "check response with no guess in flight");
            return Vec::new();
        }
        self.bump();

        // Unrecognized word: no attempt consumed, row and cursor unchanged.
        if !result.exists {
            self.phase = Phase::Idle;
            let mut actions = self.shake();
            actions.extend(self.transient("Not in word list"));
            return actions;
        }

        for (col, &state) in result.states.iter().enumerate() {
            self.board.set_state(self.row, col, state);
            if let Some(letter) = self.board.tile(self.row, col).letter {
                self.keyboard.absorb(letter, state);
            }
        }

        if result.solved {
            self.phase = Phase::Solved;
            debug!(row = self.row, "solved");
            vec![self.schedule(Effect::ShowVictory, REVEAL_DELAY)]
        } else if self.row < MAX_GUESSES - 1 {
            self.phase = Phase::RowAdvancing;
            self.row += 1;
            self.col = 0;
            vec![self.schedule(Effect::Unlock, REVEAL_DELAY)]
        } else {
            self.phase = Phase::Exhausted;
            debug!("out of guesses");
            vec![
                Action::Reveal,
                self.schedule(Effect::ShowGameOver, REVEAL_DELAY),
            ]
        }
    }

    /// Records the revealed secret word after exhaustion.
    #[instrument(skip(self))]
    pub fn apply_reveal(&mut self, word: Word) {
        if self.phase != Phase::Exhausted {
            warn!(phase = ?self.phase, "reveal outside game over");
            return;
        }
        self.revealed = Some(word);
        // Refresh the message if the game-over banner already fired.
        if self.banner.as_ref().is_some_and(|banner| banner.sticky) {
            self.banner = Some(self.game_over_banner());
        }
    }

    /// Applies a delayed effect.
    ///
    /// Effects stamped with a stale epoch are dropped; current effects
    /// are still guarded by phase and stickiness checks, so a late timer
    /// can never corrupt newer state.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn apply_effect(&mut self, effect: Effect, epoch: u64) {
        if epoch != self.epoch {
            debug!(stamped = epoch, current = self.epoch, "dropping stale effect");
            return;
        }
        match effect {
            Effect::ClearMessage => {
                if self.banner.as_ref().is_some_and(|banner| !banner.sticky) {
                    self.banner = None;
                }
            }
            Effect::ClearShake => {
                self.shake_row = None;
            }
            Effect::Unlock => {
                if self.phase == Phase::RowAdvancing {
                    self.phase = Phase::Idle;
                }
            }
            Effect::ShowVictory => {
                if self.phase == Phase::Solved {
                    let praise = VICTORY.get(self.row).copied().unwrap_or("Well Done!");
                    let text = format!("{praise}\n{}", self.board.share_grid(self.row));
                    self.banner = Some(Banner { text, sticky: true });
                }
            }
            Effect::ShowGameOver => {
                if self.phase == Phase::Exhausted {
                    self.banner = Some(self.game_over_banner());
                }
            }
        }
    }

    /// Submits the current row, if complete.
    fn submit(&mut self) -> Vec<Action> {
        if self.col < WORD_LENGTH {
            let mut actions = self.shake();
            actions.extend(self.transient("Not enough letters"));
            return actions;
        }
        let Ok(guess) = self.board.row_text(self.row).parse::<Word>() else {
            // Unreachable with a full row of letters; treat as incomplete.
            let mut actions = self.shake();
            actions.extend(self.transient("Not enough letters"));
            return actions;
        };
        self.phase = Phase::AwaitingResult;
        debug!(%guess, row = self.row, "submitting guess");
        vec![Action::Submit(guess)]
    }

    /// Starts a new epoch, invalidating pending timers and clearing
    /// transient visuals they would have cleared.
    fn bump(&mut self) {
        self.epoch += 1;
        self.shake_row = None;
        if self.banner.as_ref().is_some_and(|banner| !banner.sticky) {
            self.banner = None;
        }
    }

    /// Shows a transient message that auto-clears.
    fn transient(&mut self, text: &str) -> Vec<Action> {
        self.banner = Some(Banner {
            text: text.to_string(),
            sticky: false,
        });
        vec![self.schedule(Effect::ClearMessage, MESSAGE_DURATION)]
    }

    /// Signals a shake on the row currently being edited.
    fn shake(&mut self) -> Vec<Action> {
        self.shake_row = Some(self.row);
        vec![self.schedule(Effect::ClearShake, SHAKE_DURATION)]
    }

    fn schedule(&self, effect: Effect, delay: Duration) -> Action {
        Action::Schedule(Scheduled {
            delay,
            effect,
            epoch: self.epoch,
        })
    }

    fn game_over_banner(&self) -> Banner {
        let text = match self.revealed {
            Some(word) => format!("Game over! The word was \"{word}\""),
            None => "Game over!".to_string(),
        };
        Banner { text, sticky: true }
    }
}

impl Default for GuessSession {
    fn default() -> Self {
        Self::new()
    }
}
