//! Service layer for business logic operations.

mod mail_notification;
mod payment_notification;

pub use mail_notification::MailNotificationService;
pub use payment_notification::{PaymentMatcher, PaymentNotificationService};

use std::sync::Arc;

use crate::config::Settings;
use crate::external::graph::{GraphMailClient, MailGateway};

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since the services sit behind `Arc`.
#[derive(Clone)]
pub struct Services {
    pub mail: Arc<MailNotificationService>,
}

impl Services {
    /// Creates all services from the loaded settings.
    pub fn new(settings: &Settings) -> Self {
        let gateway: Arc<dyn MailGateway> = Arc::new(GraphMailClient::new(&settings.graph));
        Self::with_gateway(gateway, settings)
    }

    /// Creates services on top of an explicit gateway (used by tests).
    pub fn with_gateway(gateway: Arc<dyn MailGateway>, settings: &Settings) -> Self {
        Self {
            mail: Arc::new(MailNotificationService::new(gateway, &settings.payment)),
        }
    }
}
