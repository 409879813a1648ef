//! Command-line interface.
//!
//! Defines the clap parser and how its flags override the loaded settings.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{ConfigLoader, Environment as AppEnvironment, Settings};
use crate::config::error::ConfigError;

/// Webhook receiver for Microsoft Graph mail notifications
#[derive(Parser, Debug)]
#[command(name = "mailhook-rs")]
#[command(about = "Webhook receiver for Microsoft Graph mail notifications")]
#[command(long_about = "
Mailhook-rs receives Microsoft Graph change notifications for mail messages,
fetches the full message details, and forwards payment-related emails to a
configured recipient.

EXAMPLES:
    # Start the server with default configuration
    mailhook-rs serve

    # Start server on custom host and port
    mailhook-rs serve --host 0.0.0.0 --port 8080

    # Use a single configuration file
    mailhook-rs --config /path/to/config.toml serve

    # Check configuration without starting the server
    mailhook-rs serve --dry-run
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute; defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (skips layered config loading)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override environment detection
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the webhook receiver
    Serve {
        /// Override the configured host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,

        /// Validate configuration and exit without starting the server
        #[arg(long)]
        dry_run: bool,
    },
}

/// CLI value for the application environment
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Environment {
    #[value(alias = "dev")]
    Development,
    Test,
    #[value(alias = "stage")]
    Staging,
    #[value(alias = "prod")]
    Production,
}

impl From<Environment> for AppEnvironment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => AppEnvironment::Development,
            Environment::Test => AppEnvironment::Test,
            Environment::Staging => AppEnvironment::Staging,
            Environment::Production => AppEnvironment::Production,
        }
    }
}

impl Cli {
    /// Load settings honoring the CLI flags.
    ///
    /// `--env` and `--config` are exported as the corresponding environment
    /// variables before the loader runs, so they take the same code path as
    /// external configuration. Flag overrides (`--host`, `--port`,
    /// `--verbose`, `--quiet`) are applied on top of the loaded settings.
    pub fn load_settings(&self) -> Result<Settings, ConfigError> {
        if let Some(env) = self.env {
            // Safety: called before any threads are spawned
            unsafe {
                std::env::set_var(AppEnvironment::ENV_VAR, AppEnvironment::from(env).as_str());
            }
        }
        if let Some(config) = &self.config {
            unsafe {
                std::env::set_var("MAILHOOK_CONFIG_FILE", config);
            }
        }

        let mut settings = ConfigLoader::new()?.load()?;
        self.apply_overrides(&mut settings);
        Ok(settings)
    }

    /// Apply flag overrides to loaded settings.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if self.verbose {
            settings.logger.level = "debug".to_string();
        } else if self.quiet {
            settings.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve { host, port, .. }) = &self.command {
            if let Some(host) = host {
                settings.server.host = host.clone();
            }
            if let Some(port) = port {
                settings.server.port = *port;
            }
        }
    }

    /// Whether this invocation is a dry run
    pub fn dry_run(&self) -> bool {
        matches!(
            self.command,
            Some(Commands::Serve { dry_run: true, .. })
        )
    }
}

/// Validate configuration and report without starting the server.
pub fn run_dry_run(settings: &Settings) -> Result<(), ConfigError> {
    settings.validate()?;

    println!("✓ Configuration is valid");
    println!("✓ Server would bind to: {}", settings.server.address());
    println!("✓ Graph API URL: {}", settings.graph.api_url);
    println!(
        "✓ Access token configured: {}",
        settings.graph.has_access_token()
    );
    println!("Dry run completed successfully - configuration is ready for deployment");

    Ok(())
}
