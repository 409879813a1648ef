//! Mail change notification pipeline.

use std::sync::Arc;

use crate::api::dto::ChangeNotification;
use crate::config::PaymentConfig;
use crate::external::graph::{MailGateway, resource};
use crate::services::PaymentNotificationService;

/// Orchestrates the per-notification pipeline:
/// filter → resolve ids → fetch → classify → notify.
///
/// Every step soft-fails: a notification that cannot be processed is logged
/// and dropped, and never affects its siblings in the same batch.
pub struct MailNotificationService {
    gateway: Arc<dyn MailGateway>,
    payment: PaymentNotificationService,
}

impl MailNotificationService {
    pub fn new(gateway: Arc<dyn MailGateway>, payment_config: &PaymentConfig) -> Self {
        let payment = PaymentNotificationService::new(gateway.clone(), payment_config);
        Self { gateway, payment }
    }

    /// Whether the underlying gateway has a credential configured.
    pub fn graph_configured(&self) -> bool {
        self.gateway.is_configured()
    }

    /// Access to the payment service (administrative operations).
    pub fn payment(&self) -> &PaymentNotificationService {
        &self.payment
    }

    /// Process one change notification end to end.
    ///
    /// Never fails: every gate logs and returns early instead.
    pub async fn process(&self, notification: &ChangeNotification) {
        // Only mail resources travel this pipeline; the same webhook channel
        // can carry calendar or contact events.
        if !notification.resource.to_lowercase().contains("messages") {
            tracing::debug!(resource = %notification.resource, "Skipping non-mail notification");
            return;
        }

        tracing::info!(
            change_type = %notification.change_type,
            subscription_id = %notification.subscription_id,
            "Processing mail notification"
        );

        let (user_id, message_id) = resource::parse_resource_path(&notification.resource);
        let (Some(user_id), Some(message_id)) = (user_id, message_id) else {
            tracing::error!(
                resource = %notification.resource,
                "Could not extract user/message id from resource"
            );
            return;
        };

        tracing::info!(user_id = %user_id, message_id = %message_id, "Fetching mail details");

        let mail_details = match self.gateway.fetch_message(&user_id, &message_id).await {
            Ok(details) => details,
            Err(e) => {
                tracing::warn!(
                    message_id = %message_id,
                    error = %e,
                    "Could not fetch details for message"
                );
                return;
            }
        };

        tracing::info!(
            from = %format!("{} <{}>", mail_details.from_name, mail_details.from_address),
            subject = %mail_details.subject,
            received = %mail_details.received_display(),
            importance = %mail_details.importance,
            has_attachments = mail_details.has_attachments,
            preview = %mail_details.body_preview,
            "Mail received"
        );

        self.payment.process_payment_email(&mail_details).await;
    }
}
