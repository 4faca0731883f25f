//! Todo model and in-memory store for `todolist`.
//!
//! The store is a plain owned container: the UI owns exactly one
//! [`TodoStore`] and mutates it through [`TodoStore::add`],
//! [`TodoStore::toggle`], and [`TodoStore::delete`].

pub mod clock;
pub mod store;
pub mod todo;

pub use clock::{Clock, ManualClock, SystemClock};
pub use store::TodoStore;
pub use todo::{Todo, TodoId};
