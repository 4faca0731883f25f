//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use todolist_core::Clock;

use super::theme;
use crate::app::{App, Focus};

/// Key help for the focused control.
#[must_use]
pub const fn help_text(focus: Focus) -> &'static str {
    match focus {
        Focus::Title => "Enter: add task | Tab: next field | Esc: quit",
        Focus::Description => "Enter: new line | Tab: next field | Esc: quit",
        Focus::AddButton => "Enter/Space: add task | Tab: next field | Esc: quit",
        Focus::List => "↑↓/jk: select | Space: toggle | d: delete | Tab: next field | Esc: quit",
    }
}

/// Task counts, e.g. "3 tasks, 1 done".
#[must_use]
pub fn summary(total: usize, done: usize) -> String {
    let noun = if total == 1 { "task" } else { "tasks" };
    format!("{total} {noun}, {done} done")
}

/// Render the status bar at the bottom of the screen.
pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let status_line = Line::from(vec![
        Span::styled(
            concat!("todolist v", env!("CARGO_PKG_VERSION")),
            theme::bold(),
        ),
        Span::raw(" | "),
        Span::raw(summary(app.store.len(), app.store.completed_count())),
        Span::raw(" | "),
        Span::styled(help_text(app.focus), theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
