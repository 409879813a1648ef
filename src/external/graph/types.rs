//! Wire types for the Graph API.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::models::MailDetails;

/// Maximum number of characters kept when deriving a preview from the body
const PREVIEW_LIMIT: usize = 500;

// ============================================================================
// Inbound: message resource
// ============================================================================

/// Raw Graph message resource, as returned by
/// `GET /users/{id}/messages/{id}`.
///
/// Every field is optional on the wire; normalization into [`MailDetails`]
/// supplies the fallbacks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMessage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub from: Option<GraphRecipient>,
    #[serde(default)]
    pub body_preview: Option<String>,
    #[serde(default)]
    pub body: Option<GraphItemBody>,
    #[serde(default)]
    pub received_date_time: Option<Timestamp>,
    #[serde(default)]
    pub has_attachments: bool,
    #[serde(default)]
    pub importance: Option<String>,
}

/// Sender wrapper (`from.emailAddress.{name,address}`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphRecipient {
    #[serde(default)]
    pub email_address: Option<GraphEmailAddress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEmailAddress {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Message body (`body.{contentType,content}`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphItemBody {
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl From<GraphMessage> for MailDetails {
    fn from(raw: GraphMessage) -> Self {
        let from_email = raw
            .from
            .and_then(|recipient| recipient.email_address)
            .unwrap_or_default();

        // Prefer the provider preview; fall back to the start of a plain
        // text body, and finally to a literal.
        let mut body_preview = raw.body_preview.unwrap_or_default();
        if body_preview.is_empty() {
            if let Some(body) = &raw.body {
                if body.content_type.as_deref() == Some("text") {
                    body_preview = body
                        .content
                        .as_deref()
                        .unwrap_or_default()
                        .chars()
                        .take(PREVIEW_LIMIT)
                        .collect();
                }
            }
        }
        if body_preview.is_empty() {
            body_preview = "Sin contenido".to_string();
        }

        Self {
            id: raw.id.unwrap_or_default(),
            subject: raw.subject.unwrap_or_else(|| "Sin asunto".to_string()),
            from_name: from_email.name.unwrap_or_else(|| "Sin nombre".to_string()),
            from_address: from_email
                .address
                .unwrap_or_else(|| "Desconocido".to_string()),
            body_preview,
            received: raw.received_date_time,
            has_attachments: raw.has_attachments,
            importance: raw.importance.unwrap_or_else(|| "normal".to_string()),
        }
    }
}

// ============================================================================
// Outbound: sendMail payload
// ============================================================================

/// Body of `POST /me/sendmail`
#[derive(Debug, Clone, Serialize)]
pub struct SendMailRequest {
    pub message: OutgoingMessage,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingMessage {
    pub subject: String,
    pub body: OutgoingBody,
    pub to_recipients: Vec<OutgoingRecipient>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingBody {
    pub content_type: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingRecipient {
    pub email_address: OutgoingAddress,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutgoingAddress {
    pub address: String,
}

impl SendMailRequest {
    /// Plain text message with a single recipient.
    pub fn plain_text(subject: &str, content: &str, recipient: &str) -> Self {
        Self {
            message: OutgoingMessage {
                subject: subject.to_string(),
                body: OutgoingBody {
                    content_type: "Text".to_string(),
                    content: content.to_string(),
                },
                to_recipients: vec![OutgoingRecipient {
                    email_address: OutgoingAddress {
                        address: recipient.to_string(),
                    },
                }],
            },
        }
    }
}
