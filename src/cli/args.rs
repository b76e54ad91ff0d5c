//! CLI argument definitions using clap
//!
//! Commands:
//! - string-analyzer serve [--config <path>] [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// string-analyzer - analyze, store and filter strings over HTTP
#[derive(Parser, Debug)]
#[command(name = "string-analyzer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to an optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind (overrides config and HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config and PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["string-analyzer", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config, host, port } => {
                assert!(config.is_none());
                assert!(host.is_none());
                assert!(port.is_none());
            }
        }
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "string-analyzer",
            "serve",
            "--config",
            "./server.json",
            "--port",
            "8080",
        ])
        .unwrap();
        match cli.command {
            Command::Serve { config, port, .. } => {
                assert_eq!(config, Some(PathBuf::from("./server.json")));
                assert_eq!(port, Some(8080));
            }
        }
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["string-analyzer", "serve", "--port", "99999"]).is_err());
    }
}
