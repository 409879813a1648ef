use clap::Parser;

use mailhook_rs::cli::Cli;
use mailhook_rs::logger::init_logger;
use mailhook_rs::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli
        .load_settings()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    if cli.dry_run() {
        mailhook_rs::cli::run_dry_run(&settings)
            .map_err(|e| anyhow::anyhow!("Configuration is not valid: {}", e))?;
        return Ok(());
    }

    init_logger(&settings.logger)?;

    Server::new(settings).run().await
}
