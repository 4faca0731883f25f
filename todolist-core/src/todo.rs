//! The `Todo` record and its identifier.

use chrono::{DateTime, Local};

/// Identifier of a todo, derived from its creation time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TodoId(i64);

impl TodoId {
    /// Creates a `TodoId` from a millisecond value.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the millisecond value backing this id.
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One task in the list.
///
/// Fields are only mutable through [`TodoStore`](crate::TodoStore), which
/// keeps `completed_at` set if and only if `completed` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    text: String,
    description: String,
    completed: bool,
    created_at: DateTime<Local>,
    completed_at: Option<DateTime<Local>>,
}

impl Todo {
    pub(crate) const fn new(
        id: TodoId,
        text: String,
        description: String,
        created_at: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            text,
            description,
            completed: false,
            created_at,
            completed_at: None,
        }
    }

    /// Flips completion, stamping or clearing `completed_at`.
    ///
    /// The stamp never precedes `created_at`, even if the clock stepped back.
    pub(crate) fn toggle(&mut self, now: DateTime<Local>) {
        self.completed = !self.completed;
        self.completed_at = self.completed.then_some(now.max(self.created_at));
    }

    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Task title, exactly as entered.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Free-text description; empty when none was given.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// When the task was last marked complete, if it currently is.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Local>> {
        self.completed_at
    }
}
