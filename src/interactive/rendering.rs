//! TUI rendering with ratatui
//!
//! Board grid, virtual keyboard, and message area for the game interface.

use super::app::App;
use crate::core::{Verdict, WORD_LEN};
use crate::game::{GameResult, KEYBOARD_ROWS, MAX_ATTEMPTS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Tile width plus the gap between tiles; the mouse hit-test relies on this
const TILE_STRIDE: u16 = 4;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Board
            Constraint::Length(5),                    // Keyboard
            Constraint::Min(5),                       // Message / result
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_footer(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 W O R D L E 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &mut App, area: Rect) {
    let board_width = WORD_LEN as u16 * TILE_STRIDE - 1;
    let block_area = centered_horizontal(area, board_width + 2);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(block_area);

    // Remember where the tiles land for mouse hit-tests
    app.board_area = Some(inner);

    let game = &app.game;
    let cursor = game.cursor();
    let submitted = game.history().len();

    let mut lines = Vec::with_capacity(MAX_ATTEMPTS);
    for row in 0..MAX_ATTEMPTS {
        let mut spans = Vec::with_capacity(WORD_LEN * 2 - 1);
        for col in 0..WORD_LEN {
            if col > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(tile_span(app, row, col, submitted, cursor.row(), cursor.col()));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, block_area);
}

fn tile_span(
    app: &App,
    row: usize,
    col: usize,
    submitted: usize,
    cursor_row: usize,
    cursor_col: usize,
) -> Span<'static> {
    let game = &app.game;

    // Submitted rows show their feedback colors
    if row < submitted {
        let (word, feedback) = game.history()[row];
        let letter = word.char_at(col).to_ascii_uppercase() as char;
        return Span::styled(format!(" {letter} "), verdict_style(feedback.verdict_at(col)));
    }

    let letter = game.board().row(row).get(col);
    let text = match letter {
        Some(ch) => format!(" {} ", ch.to_ascii_uppercase()),
        None => " · ".to_string(),
    };

    let mut style = if row == cursor_row {
        match letter {
            Some(_) => Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            None => Style::default().fg(Color::DarkGray),
        }
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };

    // Highlight the slot accepting the next letter
    if row == cursor_row && col == cursor_col && !game.is_finished() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    Span::styled(text, style)
}

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        Verdict::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        Verdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keys = app.game.key_status();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, letter) in row.chars().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                let text = letter.to_ascii_uppercase().to_string();
                let style = match keys.get(letter) {
                    Some(Verdict::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
                    Some(Verdict::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
                    Some(Verdict::Absent) => Style::default().fg(Color::DarkGray),
                    None => Style::default().fg(Color::White),
                };
                spans.push(Span::styled(text, style));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    if let Some(share_text) = &app.share_text {
        render_result(f, app, share_text, area);
        return;
    }

    let mut lines = Vec::new();

    if let Some(message) = &app.message {
        lines.push(Line::from(Span::styled(
            message.text.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        let attempt = (app.game.history().len() + 1).min(MAX_ATTEMPTS);
        lines.push(Line::from(format!("Attempt {attempt}/{MAX_ATTEMPTS}")));
    }

    lines.push(Line::from(Span::styled(
        "type letters · enter submit · backspace delete · click/arrows move · esc quit",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_result(f: &mut Frame, app: &App, share_text: &str, area: Rect) {
    let (title, title_style) = match app.game.result() {
        GameResult::Won => (
            " You won! ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        _ => (
            " Game over ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let mut lines: Vec<Line> = Vec::new();
    if app.game.result() == GameResult::Lost {
        lines.push(Line::from(Span::styled(
            format!("The word was {}", app.game.secret().text().to_uppercase()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
    }
    for line in share_text.lines() {
        lines.push(Line::from(line.to_string()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "n: new game · q: quit",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .title_style(title_style)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

/// Center a fixed-width rect within `area`
fn centered_horizontal(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
