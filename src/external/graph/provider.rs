//! Mail gateway trait.

use async_trait::async_trait;

use super::error::GraphError;
use crate::models::MailDetails;

/// Outbound mail API operations used by the notification pipeline.
///
/// The trait is the seam between services and the remote provider: tests
/// substitute a recording fake, production uses
/// [`GraphMailClient`](super::GraphMailClient).
#[async_trait]
pub trait MailGateway: Send + Sync {
    /// Fetch and normalize one message.
    async fn fetch_message(
        &self,
        user_id: &str,
        message_id: &str,
    ) -> Result<MailDetails, GraphError>;

    /// Send a plain text mail to a single recipient.
    async fn send_mail(
        &self,
        subject: &str,
        message: &str,
        recipient: &str,
    ) -> Result<(), GraphError>;

    /// Whether a credential is configured, without revealing it.
    fn is_configured(&self) -> bool;
}
