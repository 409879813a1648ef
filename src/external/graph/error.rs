//! Graph API soft-failure taxonomy.

use thiserror::Error;

/// Failure of a single outbound Graph call.
///
/// These are soft failures: callers log them and treat the call result as
/// absent. The variants exist so that "no credential", "remote rejected" and
/// "network error" stay distinguishable, even though every current caller
/// handles them identically.
#[derive(Debug, Error)]
pub enum GraphError {
    /// No bearer token configured at process scope
    #[error("No access token configured")]
    MissingToken,

    /// The API answered with an unexpected status
    #[error("Graph API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never completed (connect, timeout, TLS, ...)
    #[error("Graph API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body did not decode into the expected shape
    #[error("Failed to decode Graph API response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_carries_code_and_body() {
        let err = GraphError::Status {
            status: 404,
            body: "message not found".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("404"));
        assert!(rendered.contains("message not found"));
    }
}
