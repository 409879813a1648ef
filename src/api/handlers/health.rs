//! Root-level informational endpoints.

use axum::{Json, Router, extract::State, routing::get};

use crate::api::dto::{RootResponse, ServiceHealthResponse};
use crate::state::AppState;

/// Creates the root-level routes.
///
/// Routes:
/// - `GET /health` - liveness check
/// - `GET /`       - service information
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
}

/// GET /health - liveness check.
async fn health_check(State(state): State<AppState>) -> Json<ServiceHealthResponse> {
    Json(ServiceHealthResponse {
        status: "healthy".to_string(),
        service: state.application.name.clone(),
    })
}

/// GET / - service information.
async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: state.application.name.clone(),
        version: state.application.version.clone(),
    })
}
