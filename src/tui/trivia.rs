//! Event loop and rendering for the trivia mini-game.

use crate::games::trivia::{TriviaGame, TriviaPhase, CATEGORIES, QUESTIONS, VALUES};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::time::{Duration, Instant};
use tracing::info;

/// Pending question-completion timer.
struct PendingFinish {
    due: Instant,
    epoch: u64,
}

/// Runs the trivia game until the player quits.
pub async fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> Result<()> {
    let mut game = TriviaGame::new();
    // Board cursor: (category column, value row).
    let mut cursor = (0usize, 0usize);
    let mut pending: Option<PendingFinish> = None;

    loop {
        terminal.draw(|frame| draw(frame, &game, cursor))?;

        if let Some(finish) = &pending {
            if finish.due <= Instant::now() {
                game.finish_question(finish.epoch);
                pending = None;
            }
        }

        let timeout = pending
            .as_ref()
            .map(|finish| finish.due.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_millis(100))
            .min(Duration::from_millis(100));

        if !event::poll(timeout)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                info!("player quit trivia");
                return Ok(());
            }
            KeyCode::Char('r') => {
                game.reset();
                pending = None;
            }
            KeyCode::Left => cursor.0 = cursor.0.saturating_sub(1),
            KeyCode::Right => cursor.0 = (cursor.0 + 1).min(CATEGORIES.len() - 1),
            KeyCode::Up => cursor.1 = cursor.1.saturating_sub(1),
            KeyCode::Down => cursor.1 = (cursor.1 + 1).min(VALUES.len() - 1),
            KeyCode::Enter => {
                game.select(cursor.0 * VALUES.len() + cursor.1);
            }
            KeyCode::Char(digit @ '1'..='3') => {
                let picked = digit as usize - '1' as usize;
                if let Some(scheduled) = game.answer(picked) {
                    pending = Some(PendingFinish {
                        due: Instant::now() + scheduled.delay,
                        epoch: scheduled.epoch,
                    });
                }
            }
            _ => {}
        }
    }
}

fn draw(frame: &mut Frame, game: &TriviaGame, cursor: (usize, usize)) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title + score
            Constraint::Length(8),  // Board grid
            Constraint::Min(6),     // Question / result panel
            Constraint::Length(1),  // Help
        ])
        .split(area);

    let title = Paragraph::new(format!("Trivia — Score: ${}", game.score()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    draw_grid(frame, chunks[1], game, cursor);
    draw_panel(frame, chunks[2], game);

    let help = Paragraph::new("Arrows to move, Enter to pick, 1-3 to answer, r to restart, q to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_grid(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    game: &TriviaGame,
    cursor: (usize, usize),
) {
    let mut lines = Vec::new();

    let header: Vec<Span> = CATEGORIES
        .iter()
        .map(|category| {
            Span::styled(
                format!("{category:^12}"),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    lines.push(Line::from(header));

    for (row, value) in VALUES.iter().enumerate() {
        let mut spans = Vec::new();
        for col in 0..CATEGORIES.len() {
            let index = col * VALUES.len() + row;
            let label = if game.is_completed(index) {
                "—".to_string()
            } else {
                format!("${value}")
            };
            let mut style = Style::default().fg(Color::Yellow);
            if game.is_completed(index) {
                style = Style::default().fg(Color::DarkGray);
            }
            if cursor == (col, row) {
                style = style.bg(Color::White).fg(Color::Black);
            }
            spans.push(Span::styled(format!("{label:^12}"), style));
        }
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(grid, area);
}

fn draw_panel(frame: &mut Frame, area: ratatui::layout::Rect, game: &TriviaGame) {
    let lines: Vec<Line> = match game.phase() {
        TriviaPhase::Picking => {
            vec![Line::from("Pick a question from the board.")]
        }
        TriviaPhase::Asking { question } => {
            let question = &QUESTIONS[question];
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("{} for ${}", question.category, question.value),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(question.clue),
                Line::from(""),
            ];
            for (index, answer) in question.answers.iter().enumerate() {
                lines.push(Line::from(format!("  {}. {answer}", index + 1)));
            }
            lines
        }
        TriviaPhase::Showing {
            question, correct, ..
        } => {
            let question = &QUESTIONS[question];
            let verdict = if correct {
                Span::styled(
                    format!("Correct! +${}", question.value),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    format!(
                        "Wrong — the answer was {}",
                        question.answers[question.correct]
                    ),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )
            };
            vec![Line::from(question.clue), Line::from(""), Line::from(verdict)]
        }
        TriviaPhase::Complete => {
            vec![
                Line::from(Span::styled(
                    "Game Complete!",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Final score: ${}", game.score())),
                Line::from("Press r to play again."),
            ]
        }
    };

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(panel, area);
}
