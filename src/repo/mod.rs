//! Repository module
//!
//! This module provides the data access layer for the application.
//! Handlers only ever see the [`TodoItemStore`] trait; the SQLite-backed
//! implementation lives in `todo_item_repo`.

use std::sync::Arc;
use thiserror::Error;

use crate::models::{TodoItem, TodoItemFields};

mod todo_item_repo;

pub use todo_item_repo::SqliteTodoStore;

/// Failures a todo item store can report
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Todo item {0} not found")]
    NotFound(i32),
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),
}

/// CRUD persistence for todo items
///
/// Implementations assign identifiers on insert and must never reuse an
/// identifier after deletion. Lookups, replacements and deletions of an
/// unknown id fail with [`StoreError::NotFound`].
pub trait TodoItemStore: Send + Sync {
    /// Returns every item, ordered by ascending id
    fn find_all(&self) -> Result<Vec<TodoItem>, StoreError>;

    /// Returns the item with the given id
    fn find_by_id(&self, id: i32) -> Result<TodoItem, StoreError>;

    /// Persists a new item and returns it with its assigned id
    fn insert(&self, fields: &TodoItemFields) -> Result<TodoItem, StoreError>;

    /// Overwrites every field of an existing item
    fn replace(&self, id: i32, fields: &TodoItemFields) -> Result<TodoItem, StoreError>;

    /// Permanently removes an item
    fn delete(&self, id: i32) -> Result<(), StoreError>;
}

/// Store handle shared by all handlers
pub type SharedStore = Arc<dyn TodoItemStore>;
