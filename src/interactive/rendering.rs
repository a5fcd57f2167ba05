//! TUI rendering with ratatui
//!
//! Draws the board, a letter keyboard and the message/status panels.

use super::app::{App, MessageStyle};
use crate::core::{Cell, CellStatus, MAX_ROWS, Row, WORD_LEN};
use crate::engine::{GameObserver, GameStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Cell style for a scoring status
#[must_use]
pub fn status_style(status: CellStatus) -> Style {
    match status {
        CellStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
        CellStatus::Misplaced => Style::default()
            .fg(Color::Black)
            .bg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
        CellStatus::Incorrect => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellStatus::Empty => Style::default().fg(Color::White),
    }
}

/// Main UI rendering function
pub fn ui<O: GameObserver + Clone>(f: &mut Frame, app: &App<O>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                       // Header
            Constraint::Length(MAX_ROWS as u16 * 3 + 2), // Board
            Constraint::Length(5),                       // Keyboard
            Constraint::Min(4),                          // Messages
            Constraint::Length(1),                       // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
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

fn render_board<O: GameObserver + Clone>(f: &mut Frame, app: &App<O>, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); MAX_ROWS])
        .split(inner);

    let state = app.engine.state();
    let active_row = (state.status() == GameStatus::Playing).then_some(state.current_row());
    for (i, row) in state.board().rows().iter().enumerate() {
        render_row(f, row, active_row == Some(i), rows[i]);
    }
}

fn render_row(f: &mut Frame, row: &Row, active: bool, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(5); WORD_LEN])
        .flex(Flex::Center)
        .split(area);

    for (cell, cell_area) in row.iter().zip(cells.iter()) {
        render_cell(f, cell, active, *cell_area);
    }
}

fn render_cell(f: &mut Frame, cell: &Cell, active: bool, area: Rect) {
    let border_style = if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let letter = cell
        .letter
        .map(|l| l.to_ascii_uppercase().to_string())
        .unwrap_or_default();

    let paragraph = Paragraph::new(letter)
        .alignment(Alignment::Center)
        .style(status_style(cell.status))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        );
    f.render_widget(paragraph, area);
}

fn render_keyboard<O: GameObserver + Clone>(f: &mut Frame, app: &App<O>, area: Rect) {
    let summary = app.engine.board().letter_summary();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|keys| {
            let spans: Vec<Span> = keys
                .bytes()
                .map(|key| {
                    let status = summary[usize::from(key - b'a')];
                    Span::styled(
                        format!(" {} ", char::from(key.to_ascii_uppercase())),
                        status_style(status),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages<O: GameObserver + Clone>(f: &mut Frame, app: &App<O>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
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

fn render_status<O: GameObserver + Clone>(f: &mut Frame, app: &App<O>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        app.stats.total_games,
        app.stats.win_rate(),
        app.stats.current_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let state = app.engine.state();
    let turn_text = match state.status() {
        GameStatus::Playing => format!("Guess {}/{MAX_ROWS}", state.current_row() + 1),
        GameStatus::Won => "Solved!".to_string(),
        GameStatus::Lost => "Out of guesses".to_string(),
    };
    let turn = Paragraph::new(turn_text).alignment(Alignment::Center);
    f.render_widget(turn, chunks[1]);

    let help_text = if state.status().is_over() {
        "n: New Game | q: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
