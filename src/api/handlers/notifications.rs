//! Webhook ingress handlers.
//!
//! One endpoint receives both halves of the Graph webhook protocol: the
//! subscription validation handshake (echo the token as plain text) and
//! change notification deliveries (parse, process each entry, answer 202).

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;

use crate::api::dto::{ChangeNotificationCollection, NotificationsHealthResponse};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters of the webhook endpoint
#[derive(Debug, Deserialize)]
pub struct NotificationParams {
    /// Present only during the subscription validation handshake
    #[serde(rename = "validationToken")]
    pub validation_token: Option<String>,
}

/// Creates notification routes, nested under `/api/notifications`.
///
/// Routes:
/// - `POST /`       - webhook ingress (handshake + deliveries)
/// - `GET  /health` - notification service health
pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(receive_notification))
        .route("/health", get(health_check))
}

/// POST /api/notifications - receive a webhook call.
///
/// Handles, in order:
/// 1. Subscription validation: when `validationToken` is present the token
///    is echoed back as plain text before the body is even looked at.
/// 2. Change notifications: the body parses into a
///    [`ChangeNotificationCollection`] and each entry runs through the
///    pipeline sequentially. Pipeline failures are absorbed, so the
///    provider always gets 202 once the payload parsed.
async fn receive_notification(
    State(state): State<AppState>,
    Query(params): Query<NotificationParams>,
    body: Bytes,
) -> AppResult<Response> {
    // Handle subscription validation; an empty token does not count
    if let Some(token) = params.validation_token.filter(|t| !t.is_empty()) {
        tracing::info!(token = %token, "Validating subscription");
        return Ok((StatusCode::OK, token).into_response());
    }

    let collection: ChangeNotificationCollection =
        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(error = %e, "Invalid notification payload");
            match e.classify() {
                serde_json::error::Category::Syntax | serde_json::error::Category::Eof => {
                    AppError::bad_request("Invalid JSON format")
                }
                _ => AppError::bad_request(e.to_string()),
            }
        })?;

    tracing::info!(count = collection.value.len(), "Received notification batch");

    // Entries are processed in order; one failing entry never aborts the rest.
    for notification in &collection.value {
        state.services.mail.process(notification).await;
    }

    Ok(StatusCode::ACCEPTED.into_response())
}

/// GET /api/notifications/health - notification service health.
async fn health_check(State(state): State<AppState>) -> Json<NotificationsHealthResponse> {
    Json(NotificationsHealthResponse {
        status: "healthy".to_string(),
        service: state.application.name.clone(),
        graph_configured: state.services.mail.graph_configured(),
    })
}
