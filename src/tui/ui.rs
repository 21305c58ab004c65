//! Stateless rendering for the word game.

use crate::games::wordle::{GuessSession, LetterState, MAX_GUESSES, WORD_LENGTH};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Keyboard rows for the hint display.
const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Renders the full word-game screen.
pub fn draw(frame: &mut Frame, session: &GuessSession) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(8),  // Message (victory text plus share grid)
            Constraint::Length(MAX_GUESSES as u16 + 2), // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Length(1),  // Help
        ])
        .split(area);

    let title = Paragraph::new("Word Guesser")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    draw_message(frame, chunks[1], session);
    draw_board(frame, chunks[2], session);
    draw_keyboard(frame, chunks[3], session);

    let help = Paragraph::new("Type letters, Enter to submit, Backspace to delete, Esc to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_message(frame: &mut Frame, area: Rect, session: &GuessSession) {
    let message = session.message().unwrap_or("");
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, area: Rect, session: &GuessSession) {
    let mut lines = Vec::with_capacity(MAX_GUESSES);
    for row in 0..MAX_GUESSES {
        let shaking = session.shake_row() == Some(row);
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for col in 0..WORD_LENGTH {
            let tile = session.board().tile(row, col);
            let letter = tile.letter.map(|l| l.to_ascii_uppercase()).unwrap_or(' ');
            let mut style = tile_style(tile.state);
            if shaking {
                style = style.fg(Color::Red);
            }
            spans.push(Span::styled(format!(" {letter} "), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }
    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(board, centered(area, (WORD_LENGTH * 4) as u16, MAX_GUESSES as u16));
}

fn draw_keyboard(frame: &mut Frame, area: Rect, session: &GuessSession) {
    let mut lines = Vec::with_capacity(KEY_ROWS.len());
    for keys in KEY_ROWS {
        let mut spans = Vec::new();
        for letter in keys.chars() {
            let state = session.keyboard().get(letter);
            spans.push(Span::styled(
                format!("{} ", letter.to_ascii_uppercase()),
                key_style(state),
            ));
        }
        lines.push(Line::from(spans));
    }
    let keyboard = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(keyboard, area);
}

fn tile_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default()
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        LetterState::Present => Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        LetterState::Absent => Style::default().bg(Color::DarkGray).fg(Color::White),
        LetterState::Initial => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

fn key_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        LetterState::Present => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        LetterState::Absent => Style::default().fg(Color::DarkGray),
        LetterState::Initial => Style::default().fg(Color::White),
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    let horiz = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .split(vert[1]);
    horiz[1]
}
