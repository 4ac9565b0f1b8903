//! TUI rendering with ratatui
//!
//! Draws one frame from a snapshot of the current game.

use super::app::App;
use crate::core::Status;
use crate::game::{Cell, GameState, KeyboardHints, Snapshot};
use crate::output::MessageStyle;
use crate::output::formatters::create_progress_bar;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let snapshot = app.session.game().snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Grid
            Constraint::Percentage(45), // Side panel
        ])
        .split(chunks[1]);

    render_grid(f, &snapshot, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_keyboard(f, &snapshot.hints, chunks[2]);
    render_status(f, app, &snapshot, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
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

const fn status_colors(status: Status) -> (Color, Color) {
    match status {
        Status::Correct => (Color::Black, Color::Green),
        Status::Present => (Color::Black, Color::Yellow),
        Status::Absent => (Color::White, Color::DarkGray),
    }
}

fn cell_span(cell: &Cell, is_cursor: bool) -> Span<'static> {
    let letter = cell.display_char().unwrap_or('·');
    let text = format!(" {letter} ");

    let style = match cell.status() {
        Some(status) => {
            let (fg, bg) = status_colors(status);
            Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
        }
        None if is_cursor => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::REVERSED),
        None if cell.is_empty() => Style::default().fg(Color::DarkGray),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    };
    Span::styled(text, style)
}

fn render_grid(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let playing = snapshot.state == GameState::Playing;
    let mut lines = vec![Line::from("")];

    for (row_index, row) in snapshot.rows.iter().enumerate() {
        let mut spans = Vec::with_capacity(row.cells().len() * 2);
        for (cell_index, cell) in row.cells().iter().enumerate() {
            let is_cursor =
                playing && row_index == snapshot.cursor.row && cell_index == snapshot.cursor.cell;
            if cell_index > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(cell_span(cell, is_cursor));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Attempts ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_side_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Messages
            Constraint::Percentage(50), // Share or statistics
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    if let Some(text) = app.share_panel.text() {
        render_share(f, text, chunks[1]);
    } else {
        render_distribution(f, app, chunks[1]);
    }
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .entries()
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_share(f: &mut Frame, text: &str, area: Rect) {
    let lines: Vec<Line> = text.lines().map(Line::from).collect();
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Share (copy from here) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_distribution<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let distribution = &app.stats.guess_distribution;
    let most = distribution.iter().copied().max().unwrap_or(0);

    let lines: Vec<Line> = distribution
        .iter()
        .enumerate()
        .skip(1)
        .map(|(attempts, &count)| {
            let bar = create_progress_bar(count as f64, most as f64, 16);
            Line::from(vec![
                Span::raw(format!("{attempts}: ")),
                Span::styled(bar, Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn key_span(label: String, status: Option<Status>) -> Span<'static> {
    let style = match status {
        Some(status) => {
            let (fg, bg) = status_colors(status);
            Style::default().fg(fg).bg(bg)
        }
        None => Style::default().fg(Color::Black).bg(Color::Gray),
    };
    Span::styled(label, style.add_modifier(Modifier::BOLD))
}

fn render_keyboard(f: &mut Frame, hints: &KeyboardHints, area: Rect) {
    let last = KEYBOARD_ROWS.len() - 1;
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = Vec::new();
            if i == last {
                spans.push(key_span(" ENTER ".to_string(), None));
                spans.push(Span::raw(" "));
            }
            for letter in row.chars() {
                let label = format!(" {} ", letter.to_ascii_uppercase());
                spans.push(key_span(label, hints.status_of(letter)));
                spans.push(Span::raw(" "));
            }
            if i == last {
                spans.push(key_span(" ⌫ ".to_string(), None));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(keyboard, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(15),
            Constraint::Percentage(40),
        ])
        .split(area);

    let (state_text, state_color) = match snapshot.state {
        GameState::Playing => ("Playing", Color::Yellow),
        GameState::Won => ("Won", Color::Green),
        GameState::Lost => ("Lost", Color::Red),
    };
    let state = Paragraph::new(format!("State: {state_text}"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(state_color));
    f.render_widget(state, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let attempt_text = format!(
        "Attempt: {}/{}",
        (snapshot.cursor.row + 1).min(snapshot.rows.len()),
        snapshot.rows.len()
    );
    let attempt = Paragraph::new(attempt_text).alignment(Alignment::Center);
    f.render_widget(attempt, chunks[2]);

    let help_text = if snapshot.state.is_terminal() {
        "q: Quit | n: New Game | s: Share"
    } else {
        "Enter: Submit | ⌫: Erase | ^N: New | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
