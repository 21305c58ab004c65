//! Keyboard mapping for the word game.

use crate::games::wordle::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Whether the key event asks to leave the game.
pub fn is_quit(event: &KeyEvent) -> bool {
    matches!(event.code, KeyCode::Esc)
        || (event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL))
}

/// Maps a terminal key event to a session key, if it is one.
pub fn map_key(event: &KeyEvent) -> Option<Key> {
    match event.code {
        KeyCode::Char(letter) if letter.is_ascii_alphabetic() => Some(Key::Letter(letter)),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Enter => Some(Key::Enter),
        _ => None,
    }
}
