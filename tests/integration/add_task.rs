//! Integration tests for adding tasks through the pending-input controls.
//!
//! # Verification Focus
//!
//! - Enter in the title field submits; Shift+Enter does not
//! - Blank titles are rejected and pending input is kept
//! - Successful submission clears both pending fields
//! - The Add button submits only when enabled

use chrono::{Local, TimeZone};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todolist::app::{App, Focus};
use todolist_core::ManualClock;

fn make_app() -> App<ManualClock> {
    let start = Local
        .with_ymd_and_hms(2024, 1, 5, 15, 42, 0)
        .single()
        .unwrap();
    App::with_clock(ManualClock::new(start))
}

fn press(app: &mut App<ManualClock>, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App<ManualClock>, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

// =============================================================================
// Enter in the title field
// =============================================================================

#[test]
fn enter_adds_task_and_clears_title() {
    let mut app = make_app();
    type_str(&mut app, "Buy milk");
    assert!(app.can_add(), "Add should be enabled for a non-blank title");

    press(&mut app, KeyCode::Enter);

    let todos = app.store.todos();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].text(), "Buy milk");
    assert_eq!(todos[0].description(), "");
    assert!(!todos[0].is_completed());
    assert!(todos[0].completed_at().is_none());
    assert_eq!(app.title.value(), "", "title field should be cleared");
    assert!(!app.can_add(), "Add should be disabled again");
}

#[test]
fn shift_enter_does_not_submit() {
    let mut app = make_app();
    type_str(&mut app, "Buy milk");

    app.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT));

    assert!(app.store.is_empty());
    assert_eq!(app.title.value(), "Buy milk");
}

#[test]
fn blank_title_is_rejected_and_input_kept() {
    let mut app = make_app();
    type_str(&mut app, "   ");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "desc");
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus, Focus::Title);
    assert!(!app.can_add());

    press(&mut app, KeyCode::Enter);

    assert_eq!(app.store.len(), 0);
    assert_eq!(app.title.value(), "   ");
    assert_eq!(app.description.value(), "desc");
}

// =============================================================================
// Description and the Add button
// =============================================================================

#[test]
fn description_is_attached_and_cleared() {
    let mut app = make_app();
    type_str(&mut app, "Write report");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "intro");
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, "summary");
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::AddButton);

    press(&mut app, KeyCode::Enter);

    let todo = &app.store.todos()[0];
    assert_eq!(todo.text(), "Write report");
    assert_eq!(todo.description(), "intro\nsummary");
    assert_eq!(app.title.value(), "");
    assert_eq!(app.description.value(), "");
}

#[test]
fn disabled_add_button_ignores_activation() {
    let mut app = make_app();
    app.focus = Focus::Description;
    type_str(&mut app, "notes");
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::AddButton);

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' '));

    assert!(app.store.is_empty());
    assert_eq!(app.description.value(), "notes");
}

#[test]
fn space_on_add_button_submits() {
    let mut app = make_app();
    type_str(&mut app, "Call mom");
    app.focus = Focus::AddButton;

    press(&mut app, KeyCode::Char(' '));

    assert_eq!(app.store.len(), 1);
    assert_eq!(app.store.todos()[0].text(), "Call mom");
}

#[test]
fn tasks_append_in_submission_order() {
    let mut app = make_app();
    for title in ["First", "Second", "Third"] {
        type_str(&mut app, title);
        press(&mut app, KeyCode::Enter);
    }

    let texts: Vec<&str> = app.store.todos().iter().map(|t| t.text()).collect();
    assert_eq!(texts, ["First", "Second", "Third"]);

    assert_eq!(app.selected, 2, "newest card is selected");

    // Same clock instant, still distinct ids.
    let ids: Vec<_> = app.store.todos().iter().map(|t| t.id()).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}
