/// Todolist: a small todo item service
///
/// This library provides the request handling layer for a todo item
/// collection together with its SQLite persistence, layered configuration
/// and the router the server binary runs.
///
/// ### Modules
///
/// - `config`: Layered configuration (defaults, TOML file, environment, CLI)
/// - `db`: Database connection pool
/// - `dto`: Request decoding, validation and response envelopes
/// - `errors`: The API error type and its HTTP mapping
/// - `handlers`: Axum handlers for every endpoint
/// - `models`: The todo item entity
/// - `repo`: The store trait and its SQLite implementation
/// - `schema`: Database schema definitions
///
/// ### Web API
///
/// - `GET /healthz`: Liveness probe
/// - `GET /todoitems`: List all items
/// - `POST /todoitems`: Create an item
/// - `GET /todoitems/{id}`: Get an item
/// - `PUT /todoitems/{id}`: Replace an item
/// - `DELETE /todoitems/{id}`: Delete an item

/// Configuration module
pub mod config;

/// Database connection module
pub mod db;

/// Data transfer objects module
pub mod dto;

/// Error types module
pub mod errors;

/// Web API handlers module
pub mod handlers;

/// Data models module
pub mod models;

/// Repository module for database operations
pub mod repo;

/// Database schema module
pub mod schema;

#[cfg(test)]
mod test_utils;

use axum::{
    routing::get,
    Router,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tower_http::trace::TraceLayer;
use tracing::info;

use repo::SharedStore;

/// Embedded migrations, applied once at startup
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Creates the application router with all routes
///
/// ### Arguments
///
/// * `store` - The todo item store shared with all handlers
///
/// ### Returns
///
/// An Axum Router configured with all routes and the store as state
pub fn create_app(store: SharedStore) -> Router {
    Router::new()
        // Liveness probe
        .route("/healthz", get(handlers::health_handler))
        // Route for listing and creating todo items
        .route(
            "/todoitems",
            get(handlers::list_todo_items_handler).post(handlers::create_todo_item_handler),
        )
        // Route for reading, replacing and deleting a todo item by ID
        .route(
            "/todoitems/{id}",
            get(handlers::get_todo_item_handler)
                .put(handlers::update_todo_item_handler)
                .delete(handlers::delete_todo_item_handler),
        )
        // Every unrouted request still gets a JSON error envelope
        .fallback(handlers::route_not_found_handler)
        .method_not_allowed_fallback(handlers::method_not_allowed_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Runs the embedded migrations
///
/// ### Errors
///
/// Returns an error if any pending migration fails to apply.
pub fn run_migrations(conn: &mut diesel::SqliteConnection) -> anyhow::Result<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

    info!("Applied {} pending migrations", applied.len());
    Ok(())
}
