//! End-to-end walkthroughs of the guess-submission state machine.

use guesswork::{
    Action, Effect, GuessResult, GuessSession, Key, LetterState, Phase, Scheduled, Word,
    MAX_GUESSES, WORD_LENGTH,
};

fn type_word(session: &mut GuessSession, text: &str) {
    for letter in text.chars() {
        let actions = session.handle_key(Key::Letter(letter));
        assert!(actions.is_empty(), "typing produces no actions");
    }
}

/// Extracts the scheduled timer for the given effect, panicking if absent.
fn scheduled_for(actions: &[Action], wanted: Effect) -> Scheduled {
    actions
        .iter()
        .find_map(|action| match action {
            Action::Schedule(scheduled) if scheduled.effect == wanted => Some(*scheduled),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no {wanted:?} scheduled in {actions:?}"))
}

fn wrong_result() -> GuessResult {
    GuessResult {
        exists: true,
        solved: false,
        states: [LetterState::Absent; WORD_LENGTH],
    }
}

fn solved_result() -> GuessResult {
    GuessResult {
        exists: true,
        solved: true,
        states: [LetterState::Correct; WORD_LENGTH],
    }
}

#[test]
fn test_short_submit_shakes_without_consuming_attempt() {
    let mut session = GuessSession::new();
    type_word(&mut session, "cat");

    let actions = session.handle_key(Key::Enter);

    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.row(), 0);
    assert_eq!(session.message(), Some("Not enough letters"));
    assert_eq!(session.shake_row(), Some(0));
    scheduled_for(&actions, Effect::ClearShake);
    scheduled_for(&actions, Effect::ClearMessage);
}

#[test]
fn test_full_row_submits_and_locks_input() {
    let mut session = GuessSession::new();
    type_word(&mut session, "crane");

    let actions = session.handle_key(Key::Enter);

    let expected: Word = "crane".parse().unwrap();
    assert_eq!(actions, vec![Action::Submit(expected)]);
    assert_eq!(session.phase(), Phase::AwaitingResult);

    // Input is locked while the guess is in flight.
    assert!(session.handle_key(Key::Letter('x')).is_empty());
    assert!(session.handle_key(Key::Backspace).is_empty());
    assert_eq!(session.col(), WORD_LENGTH);
}

#[test]
fn test_backspace_edits_the_current_row() {
    let mut session = GuessSession::new();
    type_word(&mut session, "cra");
    session.handle_key(Key::Backspace);
    type_word(&mut session, "ne");
    assert_eq!(session.board().row_text(0), "crne");
    assert_eq!(session.col(), 4);
}

#[test]
fn test_unknown_word_keeps_the_row() {
    let mut session = GuessSession::new();
    type_word(&mut session, "zzzzz");
    session.handle_key(Key::Enter);

    let actions = session.apply_check(&GuessResult {
        exists: false,
        solved: false,
        states: [LetterState::Initial; WORD_LENGTH],
    });

    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.row(), 0);
    assert_eq!(session.board().row_text(0), "zzzzz");
    assert_eq!(session.message(), Some("Not in word list"));
    assert_eq!(session.shake_row(), Some(0));
    scheduled_for(&actions, Effect::ClearShake);
}

#[test]
fn test_wrong_guess_advances_after_unlock() {
    let mut session = GuessSession::new();
    type_word(&mut session, "slate");
    session.handle_key(Key::Enter);

    let actions = session.apply_check(&wrong_result());

    assert_eq!(session.phase(), Phase::RowAdvancing);
    assert_eq!(session.row(), 1);
    assert_eq!(session.col(), 0);

    // Input stays locked until the unlock timer fires.
    assert!(session.handle_key(Key::Letter('a')).is_empty());

    let unlock = scheduled_for(&actions, Effect::Unlock);
    session.apply_effect(unlock.effect, unlock.epoch);
    assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn test_solving_shows_victory_for_the_row() {
    let mut session = GuessSession::new();

    // Miss once, then solve on the second row.
    type_word(&mut session, "slate");
    session.handle_key(Key::Enter);
    let actions = session.apply_check(&wrong_result());
    let unlock = scheduled_for(&actions, Effect::Unlock);
    session.apply_effect(unlock.effect, unlock.epoch);

    type_word(&mut session, "crane");
    session.handle_key(Key::Enter);
    let actions = session.apply_check(&solved_result());

    assert_eq!(session.phase(), Phase::Solved);
    let victory = scheduled_for(&actions, Effect::ShowVictory);
    session.apply_effect(victory.effect, victory.epoch);

    let message = session.message().expect("victory banner shown");
    assert!(message.starts_with("Magnificent\n"), "got {message:?}");
    assert!(message.contains("🟩🟩🟩🟩🟩"));

    // Terminal phase: further input is ignored.
    assert!(session.handle_key(Key::Letter('a')).is_empty());
}

#[test]
fn test_first_row_solve_is_genius() {
    let mut session = GuessSession::new();
    type_word(&mut session, "crane");
    session.handle_key(Key::Enter);
    let actions = session.apply_check(&solved_result());
    let victory = scheduled_for(&actions, Effect::ShowVictory);
    session.apply_effect(victory.effect, victory.epoch);
    assert!(session.message().unwrap().starts_with("Genius\n"));
}

#[test]
fn test_exhaustion_reveals_and_locks() {
    let mut session = GuessSession::new();

    let mut last_actions = Vec::new();
    for _ in 0..MAX_GUESSES {
        type_word(&mut session, "slate");
        session.handle_key(Key::Enter);
        last_actions = session.apply_check(&wrong_result());
        if session.phase() == Phase::RowAdvancing {
            let unlock = scheduled_for(&last_actions, Effect::Unlock);
            session.apply_effect(unlock.effect, unlock.epoch);
        }
    }

    assert_eq!(session.phase(), Phase::Exhausted);
    assert!(last_actions.contains(&Action::Reveal));

    session.apply_reveal("crane".parse().unwrap());
    let game_over = scheduled_for(&last_actions, Effect::ShowGameOver);
    session.apply_effect(game_over.effect, game_over.epoch);

    assert_eq!(
        session.message(),
        Some("Game over! The word was \"crane\"")
    );
    assert!(session.handle_key(Key::Letter('a')).is_empty());
}

#[test]
fn test_late_reveal_refreshes_the_game_over_banner() {
    let mut session = GuessSession::new();
    for _ in 0..MAX_GUESSES {
        type_word(&mut session, "slate");
        session.handle_key(Key::Enter);
        let actions = session.apply_check(&wrong_result());
        match session.phase() {
            Phase::RowAdvancing => {
                let unlock = scheduled_for(&actions, Effect::Unlock);
                session.apply_effect(unlock.effect, unlock.epoch);
            }
            Phase::Exhausted => {
                // Banner fires before the reveal response lands.
                let game_over = scheduled_for(&actions, Effect::ShowGameOver);
                session.apply_effect(game_over.effect, game_over.epoch);
            }
            phase => panic!("unexpected phase {phase:?}"),
        }
    }

    assert_eq!(session.message(), Some("Game over!"));
    session.apply_reveal("crane".parse().unwrap());
    assert_eq!(
        session.message(),
        Some("Game over! The word was \"crane\"")
    );
}

#[test]
fn test_error_response_unlocks_without_consuming_attempt() {
    let mut session = GuessSession::new();
    type_word(&mut session, "crane");
    session.handle_key(Key::Enter);
    assert_eq!(session.phase(), Phase::AwaitingResult);

    session.apply_error("Network error, please try again.");

    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.row(), 0);
    assert_eq!(session.board().row_text(0), "crane");
    assert_eq!(session.message(), Some("Network error, please try again."));
}

#[test]
fn test_stale_clear_timer_cannot_wipe_a_newer_message() {
    let mut session = GuessSession::new();

    // "Not enough letters" schedules a clear at the current epoch.
    type_word(&mut session, "cat");
    let actions = session.handle_key(Key::Enter);
    let stale = scheduled_for(&actions, Effect::ClearMessage);

    // A failed submit bumps the epoch and shows a fresh message.
    type_word(&mut session, "ne");
    session.handle_key(Key::Enter);
    let actions = session.apply_error("Network error, please try again.");
    let fresh = scheduled_for(&actions, Effect::ClearMessage);
    assert_ne!(stale.epoch, fresh.epoch);

    // The old timer fires late and must be dropped.
    session.apply_effect(stale.effect, stale.epoch);
    assert_eq!(session.message(), Some("Network error, please try again."));

    session.apply_effect(fresh.effect, fresh.epoch);
    assert_eq!(session.message(), None);
}

#[test]
fn test_keyboard_absorbs_evaluated_rows() {
    let mut session = GuessSession::new();
    type_word(&mut session, "slate");
    session.handle_key(Key::Enter);
    session.apply_check(&GuessResult {
        exists: true,
        solved: false,
        states: [
            LetterState::Absent,
            LetterState::Absent,
            LetterState::Correct,
            LetterState::Absent,
            LetterState::Correct,
        ],
    });

    assert_eq!(session.keyboard().get('a'), LetterState::Correct);
    assert_eq!(session.keyboard().get('s'), LetterState::Absent);
    assert_eq!(session.keyboard().get('q'), LetterState::Initial);
}
