//! Broadside - unified CLI
//!
//! Runs the match server or validates its configuration.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use broadside::{AppState, MatchRegistry, ServerConfig, init_tracing, router};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config, host, port } => run_server(config, host, port).await,
        Command::CheckConfig { config } => check_config(config),
    }
}

/// Run the HTTP match server until Ctrl-C.
async fn run_server(config: Option<PathBuf>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = ServerConfig::load(config.as_deref())?.with_overrides(host, port);
    init_tracing(config.log_filter());

    info!(
        host = %config.host(),
        port = config.port(),
        expose_full_state = config.expose_full_state(),
        "Starting broadside match server"
    );

    let registry = MatchRegistry::new(config.rules().clone());
    let app = router(AppState::new(registry, *config.expose_full_state()));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Server ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Validate a config file and print the effective settings.
fn check_config(path: PathBuf) -> Result<()> {
    let config = ServerConfig::load(Some(&path))?;
    config.socket_addr()?;
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
