//! Normalized mail message record.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Simplified view of a mail message fetched from the Graph API.
///
/// Built exclusively by the Graph gateway from the raw provider record;
/// every field carries a fallback so construction never fails when the
/// source data is incomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailDetails {
    /// Provider message id
    pub id: String,
    /// Subject line ("Sin asunto" when absent)
    pub subject: String,
    /// Sender display name ("Sin nombre" when absent)
    pub from_name: String,
    /// Sender address ("Desconocido" when absent)
    pub from_address: String,
    /// Short body preview, at most 500 characters
    pub body_preview: String,
    /// When the provider received the message
    pub received: Option<Timestamp>,
    /// Whether the message carries attachments
    pub has_attachments: bool,
    /// Provider importance level, "normal" when absent
    pub importance: String,
}

impl MailDetails {
    /// Received timestamp rendered for logs and notification bodies.
    pub fn received_display(&self) -> String {
        self.received
            .map(|ts| ts.to_string())
            .unwrap_or_else(|| "desconocida".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_received_display_fallback() {
        let details = MailDetails {
            id: "m1".to_string(),
            subject: "Sin asunto".to_string(),
            from_name: "Sin nombre".to_string(),
            from_address: "Desconocido".to_string(),
            body_preview: "Sin contenido".to_string(),
            received: None,
            has_attachments: false,
            importance: "normal".to_string(),
        };

        assert_eq!(details.received_display(), "desconocida");
    }

    #[test]
    fn test_received_display_formats_timestamp() {
        let ts: Timestamp = "2024-05-01T12:30:00Z".parse().unwrap();
        let details = MailDetails {
            id: "m1".to_string(),
            subject: "Hola".to_string(),
            from_name: "Ana".to_string(),
            from_address: "ana@example.com".to_string(),
            body_preview: "contenido".to_string(),
            received: Some(ts),
            has_attachments: true,
            importance: "high".to_string(),
        };

        assert!(details.received_display().starts_with("2024-05-01T12:30:00"));
    }
}
