//! # HTTP Server
//!
//! Assembles the product router with CORS and request tracing, and serves it.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::ServerConfig;
use super::routes::{product_routes, ApiState};
use crate::store::ProductStore;

/// HTTP server for the products API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over an opened store
    pub fn new(store: ProductStore, config: ServerConfig) -> Self {
        let router = Self::build_router(store, &config);
        Self { config, router }
    }

    /// Build the router with CORS and tracing layers applied
    fn build_router(store: ProductStore, config: &ServerConfig) -> Router {
        let state = Arc::new(ApiState { store });

        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        product_routes(state)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        tracing::info!(addr = %self.config.socket_addr(), "products API listening");

        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn temp_server(config: ServerConfig) -> (TempDir, HttpServer) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = ProductStore::open(dir.path().join("products.db"))
            .await
            .expect("Failed to open store");
        (dir, HttpServer::new(store, config))
    }

    #[tokio::test]
    async fn test_server_socket_addr() {
        let config = ServerConfig {
            port: 8080,
            ..Default::default()
        };
        let (_dir, server) = temp_server(config).await;
        assert_eq!(server.socket_addr(), "127.0.0.1:8080");
    }

    #[tokio::test]
    async fn test_router_builds_with_empty_allow_list() {
        let config = ServerConfig {
            cors_origins: Vec::new(),
            ..Default::default()
        };
        let (_dir, server) = temp_server(config).await;
        let _router = server.router();
    }
}
