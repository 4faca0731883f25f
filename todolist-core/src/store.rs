//! In-memory todo store.
//!
//! `TodoStore` holds todos in insertion order and exposes the three
//! mutators the UI dispatches to. Invalid input never produces an error:
//! an empty title or an unknown id is simply ignored.

use crate::clock::{Clock, SystemClock};
use crate::todo::{Todo, TodoId};

/// Ordered, owned list of todos.
#[derive(Debug)]
pub struct TodoStore<C = SystemClock> {
    todos: Vec<Todo>,
    clock: C,
    /// Last id handed out, so ids stay unique within one millisecond.
    last_id: Option<TodoId>,
}

impl TodoStore<SystemClock> {
    /// Creates an empty store stamped by the wall clock.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TodoStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TodoStore<C> {
    /// Creates an empty store that reads time from `clock`.
    #[must_use]
    pub const fn with_clock(clock: C) -> Self {
        Self {
            todos: Vec::new(),
            clock,
            last_id: None,
        }
    }

    /// Appends a new open todo.
    ///
    /// Returns `None` without touching the store if `text` is empty after
    /// trimming. Title and description are stored as given.
    pub fn add(&mut self, text: &str, description: &str) -> Option<TodoId> {
        if text.trim().is_empty() {
            tracing::trace!("rejected todo with empty title");
            return None;
        }

        let now = self.clock.now();
        let id = self.next_id(now.timestamp_millis());
        self.todos.push(Todo::new(
            id,
            text.to_string(),
            description.to_string(),
            now,
        ));
        tracing::debug!(%id, "todo added");
        Some(id)
    }

    /// Flips completion of the todo with `id`.
    ///
    /// Returns `false` if no such todo exists.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        let now = self.clock.now();
        let Some(todo) = self.todos.iter_mut().find(|t| t.id() == id) else {
            return false;
        };
        todo.toggle(now);
        tracing::debug!(%id, completed = todo.is_completed(), "todo toggled");
        true
    }

    /// Removes the todo with `id`, keeping the order of the rest.
    ///
    /// Returns `false` if no such todo exists.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id() != id);
        let removed = self.todos.len() != before;
        if removed {
            tracing::debug!(%id, "todo deleted");
        }
        removed
    }

    /// All todos in display order.
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Number of todos currently marked complete.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.is_completed()).count()
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Millisecond timestamp as id, bumped past the last issued id when
    /// the clock has not moved on.
    fn next_id(&mut self, millis: i64) -> TodoId {
        let millis = match self.last_id {
            Some(last) if millis <= last.as_millis() => last.as_millis().saturating_add(1),
            _ => millis,
        };
        let id = TodoId::from_millis(millis);
        self.last_id = Some(id);
        id
    }
}
