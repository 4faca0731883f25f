//! Terminal UI rendering.

pub mod input_panel;
pub mod status_bar;
pub mod theme;
pub mod todo_list;

use std::fmt::Write;

use chrono::{DateTime, Local};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};
use todolist_core::Clock;

use crate::app::{App, DEFAULT_TIMESTAMP_FORMAT};

/// Main draw function for the entire UI.
pub fn draw<C: Clock>(frame: &mut Frame, app: &App<C>) {
    // Header, input controls, task cards, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(input_panel::HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    input_panel::render(frame, chunks[1], app);
    todo_list::render(frame, chunks[2], app);
    status_bar::render(frame, chunks[3], app);
}

fn render_header<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::header())
        .style(theme::header());
    let paragraph = Paragraph::new(app.header_title.as_str())
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Format a timestamp with a chrono format string.
///
/// Falls back to [`DEFAULT_TIMESTAMP_FORMAT`] when `format` is invalid.
#[must_use]
pub fn format_timestamp(time: &DateTime<Local>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", time.format(DEFAULT_TIMESTAMP_FORMAT));
    }
    out
}
