//! CLI command implementations

use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event_with_fields, Event, Logger};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => {
            let config = resolve_config(config.as_deref(), host, port)?;
            serve(config)
        }
    }
}

/// Resolve configuration: defaults < file < environment < flags
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<HttpServerConfig> {
    let base = match path {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };
    let mut config = base.apply_env()?;

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    Ok(config)
}

/// Start the HTTP server and block until it exits
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    Logger::set_min_severity(config.severity()?);

    let port = config.port.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("host", config.host.as_str()), ("port", port.as_str())],
    );

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async { server.start().await }).map_err(|e| {
        let message = e.to_string();
        log_event_with_fields(Event::ServerFailed, &[("error", message.as_str())]);
        CliError::serve_failed(format!("HTTP server failed: {}", message))
    })
}
