//! Common test utilities for todolist integration tests
//!
//! This file contains the test application setup and small helpers for
//! sending JSON requests and reading JSON responses.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use todolist::{
    create_app,
    db::init_pool,
    models::TodoItem,
    repo::SqliteTodoStore,
    run_migrations,
};
use tower::ServiceExt;

/// A response reduced to what the tests look at
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Value,
}

/// Creates a test application with its own in-memory SQLite database
///
/// The shared-cache URI is unique per call so every pooled connection sees
/// the same schema while tests stay isolated from each other.
pub fn create_test_app() -> Router {
    let database_url = format!(
        "file:integration_{}?mode=memory&cache=shared",
        uuid::Uuid::new_v4()
    );
    let pool = init_pool(&database_url).unwrap();

    let conn = &mut pool.get().unwrap();
    run_migrations(conn).unwrap();

    create_app(Arc::new(SqliteTodoStore::new(pool)))
}

/// Sends a request with an optional raw body and decodes the JSON response
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    TestResponse {
        status,
        content_type,
        body,
    }
}

/// Creates a todo item via the API and returns it
pub async fn create_todo_item(app: &Router, title: &str, description: &str, completed: bool) -> TodoItem {
    let payload = serde_json::json!({
        "title": title,
        "description": description,
        "completed": completed,
    });

    let response = send(app, Method::POST, "/todoitems", Some(&payload.to_string())).await;
    assert_eq!(response.status, StatusCode::CREATED);

    serde_json::from_value(response.body).unwrap()
}

/// Asserts a 404 with the item-not-found envelope
pub fn assert_item_not_found(response: &TestResponse) {
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, serde_json::json!({ "error": "Item not found" }));
}
