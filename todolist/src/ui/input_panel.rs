//! Pending-input controls: title field, description field, Add button.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use todolist_core::Clock;

use super::theme;
use crate::app::{App, Focus};
use crate::input::TextInput;

/// Rows of the description field, excluding borders.
pub const DESCRIPTION_ROWS: u16 = 3;

/// Total height of the panel.
pub const HEIGHT: u16 = 3 + DESCRIPTION_ROWS + 2 + 3;

const CURSOR: char = '█';

/// Render the title field, description field, and Add button.
pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(DESCRIPTION_ROWS + 2),
            Constraint::Length(3),
        ])
        .split(area);

    render_title(frame, chunks[0], app);
    render_description(frame, chunks[1], app);
    render_button(frame, chunks[2], app);
}

fn render_title<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let is_focused = app.focus == Focus::Title;
    let line = field_text(&app.title, is_focused, "Add a new task...")
        .lines
        .into_iter()
        .next()
        .unwrap_or_default();

    let block = Block::default()
        .title("Task")
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    // Slide sideways so the cursor stays in view.
    let offset = if is_focused {
        horizontal_scroll(app.title.cursor(), block.inner(area).width)
    } else {
        0
    };

    let paragraph = Paragraph::new(line).block(block).scroll((0, offset));
    frame.render_widget(paragraph, area);
}

/// Columns to skip so the cursor cell at `cursor` fits in `width` columns.
#[must_use]
pub fn horizontal_scroll(cursor: usize, width: u16) -> u16 {
    u16::try_from((cursor + 1).saturating_sub(usize::from(width))).unwrap_or(u16::MAX)
}

fn render_description<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let is_focused = app.focus == Focus::Description;
    let text = field_text(&app.description, is_focused, "Add description (optional)");

    // Keep the cursor row inside the visible rows.
    let cursor_row = app
        .description
        .value()
        .chars()
        .take(app.description.cursor())
        .filter(|&c| c == '\n')
        .count();
    let scroll = u16::try_from(cursor_row)
        .unwrap_or(u16::MAX)
        .saturating_sub(DESCRIPTION_ROWS - 1);

    let block = Block::default()
        .title("Description")
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    let paragraph = Paragraph::new(text).block(block).scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_button<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let is_focused = app.focus == Focus::AddButton;
    let enabled = app.can_add();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        "+ Add Task",
        theme::button(enabled),
    )))
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(paragraph, area);
}

/// Field contents with a cursor when focused, or a dimmed placeholder
/// when empty.
fn field_text(input: &TextInput, is_focused: bool, placeholder: &'static str) -> Text<'static> {
    if input.value().is_empty() {
        let mut spans = Vec::with_capacity(2);
        if is_focused {
            spans.push(Span::styled(CURSOR.to_string(), theme::normal()));
        }
        spans.push(Span::styled(placeholder, theme::dimmed()));
        return Text::from(Line::from(spans));
    }
    let display = if is_focused {
        input.with_cursor(CURSOR)
    } else {
        input.value().to_string()
    };
    Text::styled(display, theme::normal())
}
