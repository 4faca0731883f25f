//! Task card rendering.
//!
//! Each todo is drawn as a bordered card: a title row on the todo's accent
//! color, then the optional description and its timestamps. Title and
//! body wrap to the card width, and card heights follow. Cards stack
//! top to bottom; when they overflow, the window slides so the selected
//! card stays visible.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use todolist_core::{Clock, Todo};

use super::{format_timestamp, theme};
use crate::app::{App, Focus};

/// Message shown in place of the list when there are no todos.
pub const EMPTY_MESSAGE: &str = "Your to-do list is empty. Add a task to get started!";

/// Label of the per-card delete control.
pub const DELETE_LABEL: &str = "[Delete]";

/// Columns taken by the delete control.
const DELETE_WIDTH: u16 = 8;

/// Render the task cards, or the empty-state message.
pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let todos = app.store.todos();
    if todos.is_empty() {
        render_empty(frame, area);
        return;
    }

    let list_focused = app.focus == Focus::List;
    let heights: Vec<u16> = todos
        .iter()
        .map(|todo| card_height(todo, &app.timestamp_format, area.width))
        .collect();
    let (start, end) = visible_range(&heights, app.selected, area.height);

    let mut y = area.y;
    for (idx, todo) in todos.iter().enumerate().take(end).skip(start) {
        let card_area = Rect::new(area.x, y, area.width, heights[idx]).intersection(area);
        let selected = list_focused && idx == app.selected;
        render_card(frame, card_area, todo, selected, &app.timestamp_format);
        y = y.saturating_add(heights[idx]);
    }
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .split(area);

    let paragraph = Paragraph::new(EMPTY_MESSAGE)
        .style(theme::dimmed())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, chunks[1]);
}

fn render_card(frame: &mut Frame, area: Rect, todo: &Todo, selected: bool, format: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::card_border(todo.is_completed(), selected));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let accent = theme::card_color(todo.id());
    let title = title_paragraph(todo);
    let title_rows = title.line_count(title_width(inner.width)).max(1);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(u16::try_from(title_rows).unwrap_or(u16::MAX)),
            Constraint::Min(0),
        ])
        .split(inner);

    let title_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(DELETE_WIDTH)])
        .split(chunks[0]);

    frame.render_widget(title.style(theme::card_title_row(accent)), title_row[0]);
    frame.render_widget(
        Paragraph::new(DELETE_LABEL)
            .style(theme::card_title_row(accent))
            .alignment(Alignment::Right),
        title_row[1],
    );

    frame.render_widget(body_paragraph(todo, format), chunks[1]);
}

/// Width left for the title next to the delete control.
const fn title_width(inner_width: u16) -> u16 {
    inner_width.saturating_sub(DELETE_WIDTH)
}

fn title_paragraph(todo: &Todo) -> Paragraph<'_> {
    Paragraph::new(title_line(todo)).wrap(Wrap { trim: false })
}

fn body_paragraph<'a>(todo: &'a Todo, format: &str) -> Paragraph<'a> {
    Paragraph::new(body_lines(todo, format)).wrap(Wrap { trim: false })
}

/// Checkbox and title, struck through once completed.
#[must_use]
pub fn title_line(todo: &Todo) -> Line<'_> {
    let (checkbox, title_style) = if todo.is_completed() {
        ("[x] ", theme::completed_title())
    } else {
        ("[ ] ", theme::card_title_row(theme::card_color(todo.id())))
    };
    Line::from(vec![
        Span::raw(checkbox),
        Span::styled(todo.text(), title_style),
    ])
}

/// Description lines (none if empty), then "Created:" and, only for
/// completed todos, "Completed:".
#[must_use]
pub fn body_lines<'a>(todo: &'a Todo, format: &str) -> Vec<Line<'a>> {
    let mut lines: Vec<Line<'a>> = if todo.description().is_empty() {
        Vec::new()
    } else {
        todo.description()
            .lines()
            .map(|l| Line::from(Span::styled(l, theme::dimmed())))
            .collect()
    };

    lines.push(Line::from(Span::styled(
        format!("Created: {}", format_timestamp(&todo.created_at(), format)),
        theme::timestamp(),
    )));

    if let Some(completed_at) = todo.completed_at().filter(|_| todo.is_completed()) {
        lines.push(Line::from(vec![
            Span::styled("Completed: ", theme::normal().fg(theme::SUCCESS)),
            Span::styled(format_timestamp(&completed_at, format), theme::timestamp()),
        ]));
    }

    lines
}

/// Height of a card `width` columns wide, borders included, with the
/// title and body wrapped to fit.
#[must_use]
pub fn card_height(todo: &Todo, format: &str, width: u16) -> u16 {
    let inner = width.saturating_sub(2);
    let title = title_paragraph(todo).line_count(title_width(inner)).max(1);
    let body = body_paragraph(todo, format).line_count(inner);
    u16::try_from(2 + title + body).unwrap_or(u16::MAX)
}

/// Range of card indexes that fit in `available` rows with `selected` shown.
///
/// Starts at the top when possible, otherwise at the first card that lets
/// the selected card fit at the bottom.
#[must_use]
pub fn visible_range(heights: &[u16], selected: usize, available: u16) -> (usize, usize) {
    if heights.is_empty() {
        return (0, 0);
    }
    let selected = selected.min(heights.len() - 1);
    let available = u32::from(available);
    let rows = |cards: &[u16]| cards.iter().map(|&h| u32::from(h)).sum::<u32>();

    let mut start = 0;
    while start < selected && rows(&heights[start..=selected]) > available {
        start += 1;
    }

    let mut end = start;
    let mut used = 0;
    while end < heights.len() && used + u32::from(heights[end]) <= available {
        used += u32::from(heights[end]);
        end += 1;
    }
    // Always show at least the selected card, clipped if it is too tall.
    (start, end.max(selected + 1))
}
