//! HTTP Server Configuration
//!
//! Host, port, CORS allow-list, and database location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the CORS allow-list (comma-separated)
pub const CORS_ENV_VAR: &str = "CORS_ALLOW_ORIGINS";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: local front-end dev servers)
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// SQLite database location (default: "products.db")
    #[serde(default = "default_database")]
    pub database: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:4200".to_string(), // Angular console dev server
        "http://127.0.0.1:4200".to_string(),
        "http://localhost:4300".to_string(), // Angular CRUD dev server
        "http://127.0.0.1:4300".to_string(),
        "http://localhost:5173".to_string(), // Vite (React) dev server
        "http://127.0.0.1:5173".to_string(),
    ]
}

fn default_database() -> PathBuf {
    PathBuf::from("products.db")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            database: default_database(),
        }
    }
}

impl ServerConfig {
    /// Default configuration with the CORS allow-list overridden from the
    /// environment when `CORS_ALLOW_ORIGINS` is set and non-empty
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(CORS_ENV_VAR) {
            if let Some(origins) = parse_origin_list(&raw) {
                config.cors_origins = origins;
            }
        }
        config
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a comma-separated origin list; entries are trimmed and empties
/// dropped. Returns `None` when nothing remains.
pub fn parse_origin_list(raw: &str) -> Option<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        None
    } else {
        Some(origins)
    }
}
