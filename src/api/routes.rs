//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Routes
/// - `POST /api/notifications`       - webhook ingress
/// - `GET  /api/notifications/health` - notification service health
/// - `GET  /health`, `GET /`          - root-level information
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs
/// first): the request ID middleware runs before logging so log entries can
/// carry the ID; CORS wraps the handlers innermost.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new().nest(
        "/notifications",
        handlers::notifications::notification_routes(),
    );

    Router::new()
        .nest("/api", api_routes)
        .merge(handlers::health::health_routes())
        // The provider posts from its own origin; mirror the permissive
        // CORS policy of the upstream deployment.
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
