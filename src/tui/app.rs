//! Event loop for the word-game client.
//!
//! Drives the [`GuessSession`] state machine: terminal key events and
//! due timers go in, and the session's returned [`Action`]s are carried
//! out (network round-trips, timer scheduling, the game-over reveal).

use super::http_client::GameClient;
use super::{input, ui};
use crate::api::{CheckResponse, RevealResponse};
use crate::games::wordle::{Action, Effect, GuessResult, GuessSession, Word};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// A scheduled effect with its absolute due time.
struct PendingTimer {
    due: Instant,
    effect: Effect,
    epoch: u64,
}

/// Runs the word game until the player quits.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, client: GameClient) -> Result<()> {
    let mut session = GuessSession::new();
    let mut timers: Vec<PendingTimer> = Vec::new();

    loop {
        terminal.draw(|frame| ui::draw(frame, &session))?;

        // Fire timers that have come due. Stale ones are dropped by the
        // session's epoch check.
        let now = Instant::now();
        let due: Vec<_> = timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= now)
            .map(|(index, _)| index)
            .rev()
            .collect();
        for index in due {
            let timer = timers.swap_remove(index);
            session.apply_effect(timer.effect, timer.epoch);
        }

        // Wait for input until the next timer is due.
        let timeout = timers
            .iter()
            .map(|timer| timer.due.saturating_duration_since(now))
            .min()
            .unwrap_or(Duration::from_millis(100))
            .min(Duration::from_millis(100));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if input::is_quit(&key) {
                    info!("player quit");
                    return Ok(());
                }
                if let Some(mapped) = input::map_key(&key) {
                    let actions = session.handle_key(mapped);
                    run_actions(&mut session, &client, &mut timers, actions).await?;
                }
            }
        }
    }
}

/// Carries out session actions, feeding any follow-up transitions back
/// through the worklist.
async fn run_actions(
    session: &mut GuessSession,
    client: &GameClient,
    timers: &mut Vec<PendingTimer>,
    actions: Vec<Action>,
) -> Result<()> {
    let mut queue: VecDeque<Action> = actions.into();
    while let Some(action) = queue.pop_front() {
        match action {
            Action::Schedule(scheduled) => {
                timers.push(PendingTimer {
                    due: Instant::now() + scheduled.delay,
                    effect: scheduled.effect,
                    epoch: scheduled.epoch,
                });
            }
            Action::Submit(guess) => {
                let follow_up = submit_guess(session, client, &guess).await;
                drain_input()?;
                queue.extend(follow_up);
            }
            Action::Reveal => match client.reveal().await {
                Ok(RevealResponse::Success { word }) => {
                    if let Ok(word) = word.parse::<Word>() {
                        session.apply_reveal(word);
                    }
                }
                Ok(RevealResponse::Error { message }) => {
                    warn!(message, "reveal failed");
                }
                Err(err) => {
                    warn!(error = %err, "reveal request failed");
                }
            },
        }
    }
    Ok(())
}

/// Sends one guess and applies the outcome to the session.
async fn submit_guess(
    session: &mut GuessSession,
    client: &GameClient,
    guess: &Word,
) -> Vec<Action> {
    match client.check(guess).await {
        Ok(CheckResponse::Success {
            exists,
            solved,
            correct,
        }) => session.apply_check(&GuessResult {
            exists,
            solved,
            states: correct,
        }),
        Ok(CheckResponse::Error { message }) => {
            warn!(message, "server rejected guess");
            session.apply_error(&message)
        }
        Err(err) => {
            warn!(error = %err, "check request failed");
            session.apply_error("Network error, please try again.")
        }
    }
}

/// Discards key events queued while input was locked for the round-trip.
fn drain_input() -> Result<()> {
    while event::poll(Duration::ZERO)? {
        let discarded = event::read()?;
        debug!(?discarded, "discarding input queued during lockout");
    }
    Ok(())
}
