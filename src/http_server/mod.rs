//! # HTTP Server Module
//!
//! Axum server exposing the string analysis API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/strings` - Create and list analyzed strings
//! - `/strings/filter-by-natural-language` - Free-text filtering
//! - `/strings/:string_value` - Fetch or delete by exact value

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod string_routes;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::{build_router, HttpServer};
pub use string_routes::StringsState;
