use axum::Json;
use tracing::{instrument, debug};

use crate::dto::HealthResponse;

/// Handler for the liveness probe
///
/// This function handles GET requests to `/healthz`. It never touches the
/// store and always reports the process as alive.
#[instrument]
pub async fn health_handler() -> Json<HealthResponse> {
    debug!("API health is OK");
    Json(HealthResponse { alive: true })
}
