//! Error response DTOs.

use serde::{Deserialize, Serialize};

/// Error body returned to the webhook caller.
///
/// The provider only inspects the status code; the `detail` field carries a
/// human-readable diagnostic.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_wire_shape() {
        let body = ErrorDetail::new("Invalid JSON format");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"detail": "Invalid JSON format"}));
    }
}
