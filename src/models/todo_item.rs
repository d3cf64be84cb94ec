use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Represents a todo item as stored in the `todo_items` table
///
/// The `id` is assigned by the store on insert and never changes afterwards.
/// Everything else can be replaced wholesale through [`TodoItemFields`].
#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::todo_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TodoItem {
    /// Store-assigned identifier
    id: i32,

    /// Short summary of the task, never empty
    title: String,

    /// Free-form details, empty when the client sent none
    description: String,

    /// Whether the task has been done
    completed: bool,
}

impl TodoItem {
    /// Creates a todo item with all fields specified
    ///
    /// This is primarily used for tests and for rebuilding items that
    /// were not loaded through diesel.
    pub fn new_with_fields(id: i32, title: String, description: String, completed: bool) -> Self {
        Self {
            id,
            title,
            description,
            completed,
        }
    }

    /// Gets the item's ID
    pub fn get_id(&self) -> i32 {
        self.id
    }

    /// Gets the item's title
    pub fn get_title(&self) -> String {
        self.title.clone()
    }

    /// Gets the item's description
    pub fn get_description(&self) -> String {
        self.description.clone()
    }

    /// Gets whether the item is completed
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the client-controllable part of the item
    pub fn fields(&self) -> TodoItemFields {
        TodoItemFields {
            title: self.title.clone(),
            description: self.description.clone(),
            completed: self.completed,
        }
    }
}

/// The validated, client-controllable fields of a todo item
///
/// Used both as the insert payload and as the full-replace changeset.
/// It deliberately has no `id`: identifiers only ever come from the store.
#[derive(Insertable, AsChangeset, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::todo_items)]
pub struct TodoItemFields {
    pub title: String,
    pub description: String,
    pub completed: bool,
}
