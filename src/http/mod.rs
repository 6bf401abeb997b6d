//! HTTP API module
//!
//! Request handlers, error translation, server assembly, and configuration.

mod config;
mod errors;
mod routes;
mod server;

pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use routes::{product_routes, ApiState, MessageResponse};
pub use server::HttpServer;
