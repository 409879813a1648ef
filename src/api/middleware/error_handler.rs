//! Error handler for converting AppError to HTTP responses.
//!
//! The webhook caller only ever sees 202 or 400; everything unexpected is a
//! sanitized 500. Downstream Graph failures never surface here at all, they
//! are absorbed inside the notification pipeline.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorDetail;
use crate::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Validation { field, reason } => (
                StatusCode::BAD_REQUEST,
                format!("Validation failed for {}: {}", field, reason),
            ),
            AppError::Configuration { .. } | AppError::Internal { .. } => {
                tracing::error!(error = %self, "Internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorDetail::new(detail))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = AppError::bad_request("Invalid JSON format").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_is_sanitized() {
        let err: AppError = anyhow::anyhow!("secret database path").into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
