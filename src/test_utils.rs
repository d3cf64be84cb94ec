use crate::*;
use crate::models::{TodoItem, TodoItemFields};
use crate::repo::{SharedStore, SqliteTodoStore, StoreError, TodoItemStore};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sql_types::Text;
use diesel::{QueryableByName, RunQueryDsl};
use proptest::prelude::*;
use std::sync::Arc;

/// Sets up a test database with migrations applied
///
/// Plain ":memory:" gives each pooled connection its own separate database,
/// so a unique shared-cache URI is used instead: every connection in the
/// pool sees the same schema while tests stay isolated from each other.
pub fn setup_test_db() -> db::DbPool {
    let unique_id = uuid::Uuid::new_v4();
    let database_url = format!("file:test_{}?mode=memory&cache=shared", unique_id);
    let pool = db::init_pool(&database_url).expect("Failed to create pool");

    let mut conn = pool.get().expect("Failed to get connection");
    run_migrations(&mut conn).expect("Failed to run migrations");

    pool
}

/// Sets up a SQLite-backed store on a fresh test database
pub fn setup_test_store() -> SharedStore {
    Arc::new(SqliteTodoStore::new(setup_test_db()))
}

/// A store whose every operation fails with a database error
///
/// Used to exercise the paths where the store reports something other
/// than "not found".
#[derive(Debug, Clone, Copy)]
pub struct FailingStore;

impl FailingStore {
    fn failure() -> StoreError {
        StoreError::Database(DieselError::DatabaseError(
            DatabaseErrorKind::Unknown,
            Box::new("disk I/O error".to_string()),
        ))
    }
}

impl TodoItemStore for FailingStore {
    fn find_all(&self) -> Result<Vec<TodoItem>, StoreError> {
        Err(Self::failure())
    }

    fn find_by_id(&self, _id: i32) -> Result<TodoItem, StoreError> {
        Err(Self::failure())
    }

    fn insert(&self, _fields: &TodoItemFields) -> Result<TodoItem, StoreError> {
        Err(Self::failure())
    }

    fn replace(&self, _id: i32, _fields: &TodoItemFields) -> Result<TodoItem, StoreError> {
        Err(Self::failure())
    }

    fn delete(&self, _id: i32) -> Result<(), StoreError> {
        Err(Self::failure())
    }
}

#[derive(QueryableByName, Debug)]
struct TableName {
    #[diesel(sql_type = Text)]
    name: String,
}

/// Tests the setup_test_db function
///
/// This test verifies that the migrations created the todo_items table
/// and that it is visible from a second pooled connection.
#[test]
fn test_setup_test_db() {
    let pool = setup_test_db();

    let mut conn = pool.get().unwrap();
    let table_names: Vec<TableName> =
        diesel::sql_query("SELECT name FROM sqlite_master WHERE type='table'")
            .load(&mut conn)
            .expect("Failed to load table names");

    for table in ["todo_items", "__diesel_schema_migrations"] {
        assert!(
            table_names.iter().any(|t| t.name == table),
            "Table '{}' not found in database",
            table
        );
    }

    let mut other_conn = pool.get().unwrap();
    let result = diesel::sql_query("SELECT COUNT(*) FROM todo_items").execute(&mut other_conn);
    assert!(result.is_ok(), "todo_items not visible from another connection: {:?}", result.err());
}

/// Generates a valid title: 1 to 255 printable characters
pub fn arb_title() -> impl Strategy<Value = String> {
    "\\PC{1,255}"
}

/// Generates a valid description: up to 255 printable characters
pub fn arb_description() -> impl Strategy<Value = String> {
    "\\PC{0,255}"
}

/// Generates text that is over the 255 character limit
pub fn arb_overlong_text() -> impl Strategy<Value = String> {
    "\\PC{256,400}"
}
