//! HTTP Server Configuration
//!
//! Host, port, CORS and log level. Resolved in layers:
//! defaults, then an optional JSON file, then `HOST` / `PORT` / `LOG_LEVEL`
//! from the environment, then command-line flags.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::Severity;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (empty = any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Minimum log severity (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file; missing keys take defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: HttpServerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Override from `HOST`, `PORT` and `LOG_LEVEL` when set
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    fn apply_vars<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST").filter(|h| !h.is_empty()) {
            self.host = host;
        }
        if let Some(port) = lookup("PORT").filter(|p| !p.is_empty()) {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: port.clone(),
            })?;
        }
        if let Some(level) = lookup("LOG_LEVEL").filter(|l| !l.is_empty()) {
            self.log_level = level;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.severity().map(|_| ())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> Result<Severity, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                name: "log_level",
                value: self.log_level.clone(),
            })
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
