//! Configuration settings structures for mailhook-rs
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "mailhook-rs".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_graph_api_url() -> String {
    "https://graph.microsoft.com/v1.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.host.is_empty() {
            return Err(ConfigError::validation(
                "server.host",
                "Host must not be empty.",
            ));
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ============================================================================
// Microsoft Graph Configuration
// ============================================================================

/// Microsoft Graph API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Base URL of the Graph API
    #[serde(default = "default_graph_api_url")]
    pub api_url: String,

    /// Bearer token for Graph API calls.
    ///
    /// Optional on purpose: the service starts without it and mail fetching
    /// soft-fails until one is configured (MAILHOOK_GRAPH__ACCESS_TOKEN).
    #[serde(default)]
    pub access_token: Option<String>,
}

impl GraphConfig {
    /// Whether a bearer token is configured
    pub fn has_access_token(&self) -> bool {
        self.access_token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }

    /// Validate Graph configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.is_empty() {
            return Err(ConfigError::validation(
                "graph.api_url",
                "Graph API URL must not be empty.",
            ));
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ConfigError::validation(
                "graph.api_url",
                "Graph API URL must start with http:// or https://.",
            ));
        }

        Ok(())
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            api_url: default_graph_api_url(),
            access_token: None,
        }
    }
}

// ============================================================================
// Payment Notification Configuration
// ============================================================================

/// Payment notification configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Recipient address for payment notification emails.
    ///
    /// Falls back to a placeholder address when unset.
    #[serde(default)]
    pub notification_recipient: Option<String>,

    /// Additional payment keywords merged into the built-in detection list
    #[serde(default)]
    pub extra_keywords: Vec<String>,
}

impl PaymentConfig {
    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(recipient) = &self.notification_recipient {
            if recipient.is_empty() || !recipient.contains('@') {
                return Err(ConfigError::validation(
                    "payment.notification_recipient",
                    "Notification recipient must be an email address.",
                ));
            }
        }

        if self.extra_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::validation(
                "payment.extra_keywords",
                "Payment keywords must not be empty strings.",
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Logger Configuration
// ============================================================================

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggerSettings {
    /// Validate logger configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid values are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ============================================================================
// Top-level Settings
// ============================================================================

/// Complete application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Microsoft Graph API configuration
    #[serde(default)]
    pub graph: GraphConfig,

    /// Payment notification configuration
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}

impl Settings {
    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.graph.validate()?;
        self.payment.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.graph.api_url, "https://graph.microsoft.com/v1.0");
        assert!(!settings.graph.has_access_token());
    }

    #[test]
    fn test_server_address() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(server.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_port_zero_rejected() {
        let server = ServerConfig {
            host: default_host(),
            port: 0,
        };
        assert!(server.validate().is_err());
    }

    #[test]
    fn test_graph_url_scheme_required() {
        let graph = GraphConfig {
            api_url: "graph.microsoft.com".to_string(),
            access_token: None,
        };
        assert!(graph.validate().is_err());
    }

    #[test]
    fn test_empty_access_token_counts_as_unconfigured() {
        let graph = GraphConfig {
            api_url: default_graph_api_url(),
            access_token: Some(String::new()),
        };
        assert!(!graph.has_access_token());

        let graph = GraphConfig {
            access_token: Some("token".to_string()),
            ..graph
        };
        assert!(graph.has_access_token());
    }

    #[test]
    fn test_recipient_must_look_like_email() {
        let payment = PaymentConfig {
            notification_recipient: Some("not-an-address".to_string()),
            extra_keywords: Vec::new(),
        };
        assert!(payment.validate().is_err());

        let payment = PaymentConfig {
            notification_recipient: Some("finance@example.com".to_string()),
            extra_keywords: Vec::new(),
        };
        assert!(payment.validate().is_ok());
    }

    #[test]
    fn test_blank_extra_keyword_rejected() {
        let payment = PaymentConfig {
            notification_recipient: None,
            extra_keywords: vec!["factura".to_string(), "  ".to_string()],
        };
        assert!(payment.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let logger = LoggerSettings {
            level: "loud".to_string(),
        };
        assert!(logger.validate().is_err());
    }

    #[test]
    fn test_settings_from_toml_fragment() {
        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [server]
                host = "0.0.0.0"
                port = 9000

                [graph]
                access_token = "secret-token"

                [payment]
                notification_recipient = "finance@example.com"
                extra_keywords = ["factura"]
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 9000);
        assert!(settings.graph.has_access_token());
        assert_eq!(
            settings.payment.notification_recipient.as_deref(),
            Some("finance@example.com")
        );
        assert_eq!(settings.payment.extra_keywords, vec!["factura"]);
        assert!(settings.validate().is_ok());
    }
}
