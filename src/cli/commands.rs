//! CLI command implementations
//!
//! `serve` boots in a fixed order: validate flags, install logging, build the
//! store, start the runtime, bind, serve.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::Level;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::RecordStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose)?;
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            host,
            port,
            empty,
            cors_origins,
        } => {
            let config = HttpServerConfig {
                host,
                port,
                cors_origins,
            };
            serve(config, empty)
        }
    }
}

fn init_logging(verbose: bool) -> CliResult<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::boot_failed(format!("Failed to install logger: {}", e)))
}

/// Reject flag combinations the server would otherwise silently mangle
pub fn validate_config(config: &HttpServerConfig) -> CliResult<()> {
    config.socket_addr().parse::<SocketAddr>().map_err(|e| {
        CliError::config_error(format!(
            "Invalid listen address '{}': {}",
            config.socket_addr(),
            e
        ))
    })?;

    for origin in &config.cors_origins {
        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(CliError::config_error(format!(
                "Invalid CORS origin '{}': must start with http:// or https://",
                origin
            )));
        }
    }

    Ok(())
}

/// Start the HTTP server and block until it shuts down
pub fn serve(config: HttpServerConfig, empty: bool) -> CliResult<()> {
    validate_config(&config)?;

    let store = if empty {
        RecordStore::new()
    } else {
        RecordStore::seeded()
    };
    tracing::info!(
        "Student Management System starting on {} with {} students",
        config.socket_addr(),
        store.len()
    );

    let server = HttpServer::with_store(config, Arc::new(store));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}
