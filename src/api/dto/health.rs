//! Health and informational response DTOs.

use serde::{Deserialize, Serialize};

/// Response of `GET /api/notifications/health`.
///
/// Reports whether a Graph credential is configured without revealing it.
#[derive(Debug, Serialize, Deserialize)]
pub struct NotificationsHealthResponse {
    pub status: String,
    pub service: String,
    pub graph_configured: bool,
}

/// Response of the root-level `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceHealthResponse {
    pub status: String,
    pub service: String,
}

/// Response of `GET /`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}
