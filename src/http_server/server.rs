//! # HTTP Server
//!
//! Combines the health and string routers behind a CORS layer.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event_with_fields, Event};
use crate::records::RecordStore;

use super::config::HttpServerConfig;
use super::observability_routes::health_routes;
use super::string_routes::{string_routes, StringsState};

/// HTTP server for the string analysis API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with its own empty store
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_store(config, Arc::new(RecordStore::new()))
    }

    /// Create a new HTTP server over an existing store
    pub fn with_store(config: HttpServerConfig, store: Arc<RecordStore>) -> Self {
        let router = build_router(&config, store);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the listener fails
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let bound = listener.local_addr()?.to_string();
        log_event_with_fields(Event::ServerStart, &[("addr", bound.as_str())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the combined router with all endpoints
pub fn build_router(config: &HttpServerConfig, store: Arc<RecordStore>) -> Router {
    let state = StringsState::with_store(store);

    Router::new()
        .merge(health_routes())
        .merge(string_routes(state))
        .layer(ServiceBuilder::new().layer(cors_layer(&config.cors_origins)))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = origins.iter().filter_map(|s| s.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
