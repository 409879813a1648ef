//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use crate::config::Settings;
use crate::config::settings::ApplicationConfig;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Designed for Axum's State extractor. Cloning is cheap since Services
/// uses Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Application name/version, reported by informational endpoints
    pub application: ApplicationConfig,
}

impl AppState {
    /// Creates a new AppState from the loaded settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            services: Services::new(settings),
            application: settings.application.clone(),
        }
    }

    /// Creates an AppState with pre-built services (used by tests).
    pub fn with_services(services: Services, settings: &Settings) -> Self {
        Self {
            services,
            application: settings.application.clone(),
        }
    }
}
