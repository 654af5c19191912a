//! # Clinic Search
//!
//! HTTP API searching the dental and veterinary clinic directories.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - HTTP client for the upstream directories
//! - HTTP server

use anyhow::Result;
use tracing::info;

use clinic_search::config::Settings;
use clinic_search::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    clinic_search::telemetry::init_tracing();

    info!("Starting Clinic Search...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
