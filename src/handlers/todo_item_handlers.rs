use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::{debug, info, instrument, warn, Span};

use crate::dto::{SuccessResponse, TodoItemDto};
use crate::errors::ApiError;
use crate::models::TodoItem;
use crate::repo::SharedStore;

/// Parses the `{id}` path segment and records it on the current span
///
/// A segment that is not an integer, or not even valid UTF-8 once
/// percent-decoded, cannot name a stored item, so it is reported exactly
/// like an unknown id.
fn parse_item_id(path: Result<Path<String>, PathRejection>) -> Result<i32, ApiError> {
    let Path(raw) = path.map_err(|rejection| {
        debug!("Rejected item id path segment: {}", rejection);
        ApiError::NotFound
    })?;

    let id = raw.parse::<i32>().map_err(|_| {
        debug!("Path segment is not a valid item id");
        ApiError::NotFound
    })?;

    Span::current().record("item_id", id);
    Ok(id)
}

/// Unwraps the raw request body
///
/// Bodies axum could not buffer (over the size limit, or cut short) are
/// bad arguments like any other undecodable body.
fn read_body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, ApiError> {
    body.map_err(|rejection| {
        warn!("Error reading request body: {}", rejection);
        ApiError::BadArguments
    })
}

/// Handler for listing all todo items
///
/// This function handles GET requests to `/todoitems`.
///
/// ### Returns
///
/// Every stored item as a JSON array, `[]` when the store is empty
#[instrument(skip(store))]
pub async fn list_todo_items_handler(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<TodoItem>>, ApiError> {
    debug!("Listing all todo items");

    let items = store.find_all()?;

    info!("Retrieved {} todo items", items.len());
    Ok(Json(items))
}

/// Handler for retrieving a specific todo item
///
/// This function handles GET requests to `/todoitems/{id}`.
///
/// ### Returns
///
/// The requested item as JSON, or `ApiError::NotFound`
#[instrument(skip_all, fields(item_id = tracing::field::Empty))]
pub async fn get_todo_item_handler(
    State(store): State<SharedStore>,
    item_id: Result<Path<String>, PathRejection>,
) -> Result<Json<TodoItem>, ApiError> {
    let id = parse_item_id(item_id)?;
    debug!("Retrieving todo item");

    let item = store.find_by_id(id)?;

    Ok(Json(item))
}

/// Handler for creating a new todo item
///
/// This function handles POST requests to `/todoitems`. The body is read
/// raw so that a decode failure is reported as "Bad arguments" before any
/// field is validated, whatever `Content-Type` the client sent.
///
/// ### Returns
///
/// `201 Created` with the stored item, including its assigned id
#[instrument(skip(store, body))]
pub async fn create_todo_item_handler(
    State(store): State<SharedStore>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<TodoItem>), ApiError> {
    info!("Creating new todo item");

    let body = read_body(body)?;
    let fields = TodoItemDto::from_body(&body)?.into_fields()?;
    let item = store.insert(&fields)?;

    info!("Successfully created todo item with id: {}", item.get_id());
    Ok((StatusCode::CREATED, Json(item)))
}

/// Handler for replacing a todo item
///
/// This function handles PUT requests to `/todoitems/{id}`. The item must
/// exist before the body is even decoded; the replacement then overwrites
/// title, description and completion together.
#[instrument(skip_all, fields(item_id = tracing::field::Empty))]
pub async fn update_todo_item_handler(
    State(store): State<SharedStore>,
    item_id: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TodoItem>, ApiError> {
    let id = parse_item_id(item_id)?;
    info!("Updating todo item");

    store.find_by_id(id)?;

    let body = read_body(body)?;
    let fields = TodoItemDto::from_body(&body)?.into_fields()?;
    let item = store.replace(id, &fields)?;

    info!("Successfully updated todo item");
    Ok(Json(item))
}

/// Handler for deleting a todo item
///
/// This function handles DELETE requests to `/todoitems/{id}`. Deleting an
/// id twice yields `ApiError::NotFound` the second time.
#[instrument(skip_all, fields(item_id = tracing::field::Empty))]
pub async fn delete_todo_item_handler(
    State(store): State<SharedStore>,
    item_id: Result<Path<String>, PathRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let id = parse_item_id(item_id)?;
    info!("Deleting todo item");

    store.delete(id)?;

    info!("Successfully deleted todo item");
    Ok(Json(SuccessResponse { success: true }))
}
