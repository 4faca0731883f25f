//! Application state and event handling.
//!
//! `App` owns the single [`TodoStore`] plus the pending title/description
//! input. Key events either edit the pending input or dispatch to the
//! store's `add`, `toggle`, and `delete`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todolist_core::{Clock, SystemClock, Todo, TodoId, TodoStore};

use crate::input::TextInput;

/// Default chrono format for card timestamps, e.g. "Jan 5, 2024 3:42 pm".
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%b %-d, %Y %-I:%M %P";

/// Default header text.
pub const DEFAULT_HEADER_TITLE: &str = "My Todo List";

/// Which control receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Task title field (default).
    Title,
    /// Multi-line description field.
    Description,
    /// The "Add Task" button.
    AddButton,
    /// The task cards.
    List,
}

/// Whether `key` submits the title field.
///
/// Plain Enter submits; Enter combined with Shift, Alt, or Ctrl does not.
#[must_use]
pub fn is_submit_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Enter
        && !key
            .modifiers
            .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT | KeyModifiers::CONTROL)
}

/// Main application state.
pub struct App<C = SystemClock> {
    /// All todos.
    pub store: TodoStore<C>,
    /// Pending task title.
    pub title: TextInput,
    /// Pending description.
    pub description: TextInput,
    /// Which control is focused.
    pub focus: Focus,
    /// Index of the selected card.
    pub selected: usize,
    /// Chrono format used for "Created:" and "Completed:" lines.
    pub timestamp_format: String,
    /// Text shown in the header block.
    pub header_title: String,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App<SystemClock> {
    /// Create an empty application stamped by the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for App<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> App<C> {
    /// Create an empty application whose store reads time from `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            store: TodoStore::with_clock(clock),
            title: TextInput::new(),
            description: TextInput::new(),
            focus: Focus::Title,
            selected: 0,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            header_title: DEFAULT_HEADER_TITLE.to_string(),
            should_quit: false,
        }
    }

    /// Set the timestamp format (builder pattern).
    #[must_use]
    pub fn with_timestamp_format(mut self, format: &str) -> Self {
        self.timestamp_format = format.to_string();
        self
    }

    /// Set the header text (builder pattern).
    #[must_use]
    pub fn with_header_title(mut self, title: &str) -> Self {
        self.header_title = title.to_string();
        self
    }

    /// Whether the Add button is enabled.
    #[must_use]
    pub fn can_add(&self) -> bool {
        !self.title.is_blank()
    }

    /// The todo under the list selection, if any.
    #[must_use]
    pub fn selected_todo(&self) -> Option<&Todo> {
        self.store.todos().get(self.selected)
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::BackTab, _) | (KeyCode::Tab, KeyModifiers::SHIFT) => {
                self.cycle_focus_backward();
                return;
            }
            (KeyCode::Tab, _) => {
                self.cycle_focus_forward();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            Focus::Title => self.handle_title_key(key),
            Focus::Description => self.handle_description_key(key),
            Focus::AddButton => self.handle_button_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    /// Commit the pending input as a new todo.
    ///
    /// On success both pending fields are cleared and the new card is
    /// selected. A blank title leaves everything untouched.
    pub fn submit(&mut self) -> Option<TodoId> {
        if !self.can_add() {
            return None;
        }
        let id = self
            .store
            .add(self.title.value(), self.description.value())?;
        self.title.clear();
        self.description.clear();
        self.selected = self.store.len().saturating_sub(1);
        Some(id)
    }

    /// Toggle completion of the selected todo.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_todo().map(Todo::id) {
            self.store.toggle(id);
        }
    }

    /// Delete the selected todo and keep the selection in range.
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_todo().map(Todo::id) {
            self.store.delete(id);
            self.clamp_selection();
        }
    }

    fn handle_title_key(&mut self, key: KeyEvent) {
        if is_submit_key(&key) {
            self.submit();
            return;
        }
        self.edit(Focus::Title, key);
    }

    fn handle_description_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.description.insert('\n');
            return;
        }
        self.edit(Focus::Description, key);
    }

    fn handle_button_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.submit();
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = self.store.len().saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Delete | KeyCode::Char('d' | 'x') => self.delete_selected(),
            _ => {}
        }
    }

    /// Apply a text-editing key to the field named by `target`.
    fn edit(&mut self, target: Focus, key: KeyEvent) {
        let field = match target {
            Focus::Title => &mut self.title,
            Focus::Description => &mut self.description,
            Focus::AddButton | Focus::List => return,
        };
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                field.insert(c);
            }
            KeyCode::Backspace => field.backspace(),
            KeyCode::Delete => field.delete(),
            KeyCode::Left => field.move_left(),
            KeyCode::Right => field.move_right(),
            KeyCode::Home => field.move_home(),
            KeyCode::End => field.move_end(),
            _ => {}
        }
    }

    /// Cycle focus forward: Title -> Description -> Add -> List -> Title.
    const fn cycle_focus_forward(&mut self) {
        self.focus = match self.focus {
            Focus::Title => Focus::Description,
            Focus::Description => Focus::AddButton,
            Focus::AddButton => Focus::List,
            Focus::List => Focus::Title,
        };
    }

    /// Cycle focus backward: Title -> List -> Add -> Description -> Title.
    const fn cycle_focus_backward(&mut self) {
        self.focus = match self.focus {
            Focus::Title => Focus::List,
            Focus::List => Focus::AddButton,
            Focus::AddButton => Focus::Description,
            Focus::Description => Focus::Title,
        };
    }

    const fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn select_next(&mut self) {
        if self.selected < self.store.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.store.len().saturating_sub(1));
    }
}
