//! mailhook-rs Library
//!
//! Webhook receiver for Microsoft Graph mail change notifications with
//! payment-email detection and notification forwarding.

use shadow_rs::shadow;
shadow!(build);

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod models;
pub mod server;
pub mod services;
pub mod state;

pub use state::AppState;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
