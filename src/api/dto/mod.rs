//! Data transfer objects for the HTTP API.

mod error;
mod health;
mod notification;

pub use error::ErrorDetail;
pub use health::{NotificationsHealthResponse, RootResponse, ServiceHealthResponse};
pub use notification::{ChangeNotification, ChangeNotificationCollection, ChangeType};
