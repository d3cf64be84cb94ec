use crate::db::DbPool;
use crate::models::{TodoItem, TodoItemFields};
use crate::schema::todo_items;
use diesel::prelude::*;
use tracing::{instrument, debug, info};

use super::{StoreError, TodoItemStore};

/// Todo item store backed by a pooled SQLite database
///
/// The `todo_items` table must already exist; see `run_migrations`.
#[derive(Clone)]
pub struct SqliteTodoStore {
    pool: DbPool,
}

impl SqliteTodoStore {
    /// Wraps an existing connection pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl TodoItemStore for SqliteTodoStore {
    /// Retrieves all todo items from the database
    ///
    /// ### Errors
    ///
    /// Returns an error if:
    /// - Unable to get a connection from the pool
    /// - The database query fails
    #[instrument(skip(self))]
    fn find_all(&self) -> Result<Vec<TodoItem>, StoreError> {
        debug!("Listing all todo items");

        let conn = &mut self.pool.get()?;

        let result: Vec<TodoItem> = todo_items::table
            .order(todo_items::id.asc())
            .select(TodoItem::as_select())
            .load(conn)?;

        info!("Retrieved {} todo items", result.len());
        Ok(result)
    }

    /// Retrieves a todo item by its ID
    ///
    /// ### Errors
    ///
    /// Returns `StoreError::NotFound` if no row has this id, or a pool or
    /// database error if the query could not run.
    #[instrument(skip(self), fields(item_id = %id))]
    fn find_by_id(&self, id: i32) -> Result<TodoItem, StoreError> {
        debug!("Retrieving todo item by id");

        let conn = &mut self.pool.get()?;

        let result: Option<TodoItem> = todo_items::table
            .find(id)
            .select(TodoItem::as_select())
            .first(conn)
            .optional()?;

        match result {
            Some(item) => {
                debug!("Todo item found");
                Ok(item)
            }
            None => {
                debug!("Todo item not found");
                Err(StoreError::NotFound(id))
            }
        }
    }

    /// Inserts a new todo item and returns the stored row
    ///
    /// The id comes from SQLite's AUTOINCREMENT sequence, so it is never
    /// handed out twice even after deletions.
    #[instrument(skip(self, item_fields), fields(title = %item_fields.title))]
    fn insert(&self, item_fields: &TodoItemFields) -> Result<TodoItem, StoreError> {
        debug!("Inserting todo item");

        let conn = &mut self.pool.get()?;

        let item: TodoItem = diesel::insert_into(todo_items::table)
            .values(item_fields)
            .returning(TodoItem::as_returning())
            .get_result(conn)?;

        info!("Inserted todo item with id: {}", item.get_id());
        Ok(item)
    }

    /// Overwrites title, description and completion of an existing item
    #[instrument(skip(self, item_fields), fields(item_id = %id))]
    fn replace(&self, id: i32, item_fields: &TodoItemFields) -> Result<TodoItem, StoreError> {
        debug!("Replacing todo item");

        let conn = &mut self.pool.get()?;

        let item: TodoItem = diesel::update(todo_items::table.find(id))
            .set(item_fields)
            .returning(TodoItem::as_returning())
            .get_result(conn)
            .optional()?
            .ok_or(StoreError::NotFound(id))?;

        info!("Replaced todo item with id: {}", id);
        Ok(item)
    }

    /// Deletes a todo item by its ID
    ///
    /// ### Errors
    ///
    /// Returns `StoreError::NotFound` when no row was deleted.
    #[instrument(skip(self), fields(item_id = %id))]
    fn delete(&self, id: i32) -> Result<(), StoreError> {
        debug!("Deleting todo item");

        let conn = &mut self.pool.get()?;

        let deleted = diesel::delete(todo_items::table.find(id)).execute(conn)?;
        if deleted == 0 {
            debug!("Nothing to delete");
            return Err(StoreError::NotFound(id));
        }

        info!("Deleted todo item with id: {}", id);
        Ok(())
    }
}
