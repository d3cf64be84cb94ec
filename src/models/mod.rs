/// Data models module
///
/// This module defines the structures that map to the `todo_items` table:
/// the persisted entity and the client-controllable field set used for
/// inserts and full replacements.

mod todo_item;
pub use todo_item::{TodoItem, TodoItemFields};
