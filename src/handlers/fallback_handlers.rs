use axum::http::{Method, Uri};
use tracing::{instrument, debug};

use crate::errors::ApiError;

/// Handler for paths that match no route
#[instrument(skip_all, fields(path = %uri.path()))]
pub async fn route_not_found_handler(uri: Uri) -> ApiError {
    debug!("No route for path");
    ApiError::RouteNotFound
}

/// Handler for known paths requested with an unsupported method
#[instrument(skip_all, fields(method = %method, path = %uri.path()))]
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> ApiError {
    debug!("Method not allowed for path");
    ApiError::MethodNotAllowed
}
