//! Property-based tests for `TodoStore`.
//!
//! Uses proptest to verify:
//! 1. Adding a non-blank title grows the store by exactly one open todo.
//! 2. Adding a blank title never changes the store.
//! 3. Toggling twice restores the open state.
//! 4. Toggling once stamps `completed_at` at or after `created_at`, even
//!    when the clock has stepped backwards.
//! 5. Operations on a deleted id are no-ops.
//! 6. Ids stay unique and increasing in insertion order.

use chrono::{Duration, Local, TimeZone};
use proptest::prelude::*;
use todolist_core::{ManualClock, Todo, TodoStore};

fn make_store() -> TodoStore<ManualClock> {
    let start = Local
        .with_ymd_and_hms(2024, 1, 5, 15, 42, 0)
        .single()
        .unwrap();
    TodoStore::with_clock(ManualClock::new(start))
}

/// Titles with at least one non-whitespace character.
fn arb_title() -> impl Strategy<Value = String> {
    "[ \t]{0,3}[a-zA-Z0-9äöü!?][a-zA-Z0-9 äöü!?]{0,40}"
}

/// Titles made only of whitespace (including the empty string).
fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\n\r]{0,8}"
}

fn arb_description() -> impl Strategy<Value = String> {
    "[a-z \n]{0,60}"
}

/// Seeds a store with a few todos, advancing the clock between each.
fn seeded(titles: &[String], step_ms: i64) -> TodoStore<ManualClock> {
    let mut store = make_store();
    for title in titles {
        store.add(title, "");
        store.clock().advance(Duration::milliseconds(step_ms));
    }
    store
}

proptest! {
    #[test]
    fn add_non_blank_grows_by_one(
        existing in prop::collection::vec(arb_title(), 0..5),
        title in arb_title(),
        description in arb_description(),
    ) {
        let mut store = seeded(&existing, 1);
        let before = store.len();

        let id = store.add(&title, &description);
        prop_assert!(id.is_some());
        prop_assert_eq!(store.len(), before + 1);

        let last = store.todos().last().unwrap();
        prop_assert_eq!(Some(last.id()), id);
        prop_assert_eq!(last.text(), title.as_str());
        prop_assert_eq!(last.description(), description.as_str());
        prop_assert!(!last.is_completed());
        prop_assert!(last.completed_at().is_none());
    }

    #[test]
    fn add_blank_leaves_store_unchanged(
        existing in prop::collection::vec(arb_title(), 0..5),
        blank in arb_blank(),
        description in arb_description(),
    ) {
        let mut store = seeded(&existing, 1);
        let before: Vec<Todo> = store.todos().to_vec();

        prop_assert!(store.add(&blank, &description).is_none());
        prop_assert_eq!(store.todos(), before.as_slice());
    }

    #[test]
    fn toggle_twice_is_identity_on_completion(
        titles in prop::collection::vec(arb_title(), 1..6),
        pick in any::<prop::sample::Index>(),
        gap_ms in 0i64..10_000,
    ) {
        let mut store = seeded(&titles, 5);
        let id = store.todos()[pick.index(store.len())].id();

        store.toggle(id);
        store.clock().advance(Duration::milliseconds(gap_ms));
        store.toggle(id);

        let todo = store.get(id).unwrap();
        prop_assert!(!todo.is_completed());
        prop_assert!(todo.completed_at().is_none());
    }

    #[test]
    fn toggle_once_stamps_completion_after_creation(
        titles in prop::collection::vec(arb_title(), 1..6),
        pick in any::<prop::sample::Index>(),
        gap_ms in -10_000i64..10_000,
    ) {
        let mut store = seeded(&titles, 5);
        let id = store.todos()[pick.index(store.len())].id();
        store.clock().advance(Duration::milliseconds(gap_ms));

        prop_assert!(store.toggle(id));
        let todo = store.get(id).unwrap();
        prop_assert!(todo.is_completed());
        let completed_at = todo.completed_at().unwrap();
        prop_assert!(completed_at >= todo.created_at());
    }

    #[test]
    fn deleted_id_is_inert(
        titles in prop::collection::vec(arb_title(), 1..6),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = seeded(&titles, 5);
        let id = store.todos()[pick.index(store.len())].id();

        prop_assert!(store.delete(id));
        let after_delete: Vec<Todo> = store.todos().to_vec();

        prop_assert!(!store.toggle(id));
        prop_assert!(!store.delete(id));
        prop_assert_eq!(store.todos(), after_delete.as_slice());
    }

    #[test]
    fn ids_strictly_increase(
        titles in prop::collection::vec(arb_title(), 1..12),
        step_ms in 0i64..3,
    ) {
        let store = seeded(&titles, step_ms);
        let ids: Vec<_> = store.todos().iter().map(Todo::id).collect();
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}
