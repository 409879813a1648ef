//! Server module for managing HTTP server lifecycle
//!
//! This module handles server initialization, startup, and graceful shutdown.

use crate::api::routes::create_router;
use crate::config::{Environment, settings::Settings};
use crate::state::AppState;
use tokio::net::TcpListener;
use tokio::signal;

/// HTTP server manager
pub struct Server {
    settings: Settings,
}

impl Server {
    /// Create a new server with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Start the server and run until shutdown signal
    ///
    /// # Errors
    /// - Settings validation errors
    /// - Address binding errors
    /// - Server runtime errors
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::info!(
            app_name = %self.settings.application.name,
            app_version = %self.settings.application.version,
            environment = %Environment::from_env().as_str(),
            "Application starting"
        );

        tracing::info!(
            host = %self.settings.server.host,
            port = %self.settings.server.port,
            "Server configuration loaded"
        );

        tracing::info!(
            api_url = %self.settings.graph.api_url,
            token_configured = %self.settings.graph.has_access_token(),
            "Graph configuration loaded"
        );

        // A missing token is not a startup error: the service keeps
        // accepting webhooks and mail fetching soft-fails until one is set.
        if !self.settings.graph.has_access_token() {
            tracing::warn!(
                "No access token configured - mail details fetching will not work. \
                 Set MAILHOOK_GRAPH__ACCESS_TOKEN to enable it."
            );
        }

        tracing::info!(
            recipient_configured = %self.settings.payment.notification_recipient.is_some(),
            extra_keywords = self.settings.payment.extra_keywords.len(),
            "Payment notification configuration loaded"
        );

        self.settings.validate().map_err(|e| {
            tracing::error!(error = %e, "Configuration validation failed");
            anyhow::anyhow!("Configuration validation failed: {}", e)
        })?;
        tracing::info!("Configuration loaded successfully");

        // Create application state with services
        let state = AppState::new(&self.settings);
        tracing::info!("Application state created");

        // Create router with all routes and middleware
        let router = create_router(state);
        tracing::info!("Router configured");

        // Bind to the configured address
        let address = self.settings.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        tracing::info!(address = %address, "Server listening");

        // Start the server with graceful shutdown
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
