//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};
use todolist_core::TodoId;

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Border color of completed cards.
pub const SUCCESS: Color = Color::Green;

/// Border color of open cards.
pub const BORDER_MUTED: Color = Color::DarkGray;

/// Disabled control color.
pub const DISABLED: Color = Color::DarkGray;

pub const PASTEL_PINK: Color = Color::Rgb(255, 209, 220);
pub const PASTEL_BLUE: Color = Color::Rgb(174, 198, 230);
pub const PASTEL_GREEN: Color = Color::Rgb(193, 225, 193);
pub const PASTEL_YELLOW: Color = Color::Rgb(253, 253, 150);
pub const PASTEL_PURPLE: Color = Color::Rgb(203, 195, 227);

/// Card accent colors, picked by todo id.
pub const CARD_PALETTE: [Color; 5] = [
    PASTEL_PINK,
    PASTEL_BLUE,
    PASTEL_GREEN,
    PASTEL_YELLOW,
    PASTEL_PURPLE,
];

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (timestamps, metadata).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Border style for a focused or unfocused control.
#[must_use]
pub fn border(focused: bool) -> Style {
    if focused { highlighted() } else { normal() }
}

/// Accent color for a card, stable for a given id.
#[must_use]
pub fn card_color(id: TodoId) -> Color {
    let len = i64::try_from(CARD_PALETTE.len()).unwrap_or(i64::MAX);
    let idx = usize::try_from(id.as_millis().rem_euclid(len)).unwrap_or(0);
    CARD_PALETTE[idx]
}

/// Title row of a card: dark text on the accent color.
#[must_use]
pub fn card_title_row(accent: Color) -> Style {
    Style::default().fg(Color::Black).bg(accent)
}

/// Title of a completed task (struck through, grayed).
#[must_use]
pub fn completed_title() -> Style {
    Style::default()
        .fg(Color::Rgb(110, 110, 110))
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Border style of a card.
#[must_use]
pub fn card_border(completed: bool, selected: bool) -> Style {
    if selected {
        highlighted()
    } else if completed {
        Style::default().fg(SUCCESS)
    } else {
        Style::default().fg(BORDER_MUTED)
    }
}

/// Style for timestamps (dark gray).
#[must_use]
pub fn timestamp() -> Style {
    Style::default().fg(Color::Rgb(120, 120, 120))
}

/// Style for the "Add Task" button.
#[must_use]
pub fn button(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::Black)
            .bg(PASTEL_PURPLE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DISABLED)
    }
}

/// Style for the header bar.
#[must_use]
pub fn header() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(PASTEL_PURPLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}
