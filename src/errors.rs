use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json
};
use thiserror::Error;
use tracing::error;

use crate::repo::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad arguments")]
    BadArguments,
    #[error("Title is empty")]
    EmptyTitle,
    #[error("Title is too long")]
    TitleTooLong,
    #[error("Description is too long")]
    DescriptionTooLong,
    #[error("Item not found")]
    NotFound,
    #[error("Not found")]
    RouteNotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            other => ApiError::Store(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadArguments
            | ApiError::EmptyTitle
            | ApiError::TitleTooLong
            | ApiError::DescriptionTooLong => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Store failures are logged here and never shown to the client
        let message = match self {
            ApiError::Store(err) => {
                error!("Unexpected store failure: {}", err);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
