//! CLI command implementations
//!
//! Both commands open the store first; the schema initializer runs inside
//! `ProductStore::open`, so a fresh database is usable before anything else
//! touches it. A storage-unavailable condition propagates out and exits the
//! process non-zero.

use std::path::PathBuf;

use crate::http::{HttpServer, ServerConfig};
use crate::store::ProductStore;

use super::args::Command;
use super::errors::CliResult;

/// Dispatch a parsed command
pub async fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { database } => init(database).await,
        Command::Serve {
            host,
            port,
            database,
        } => serve(host, port, database).await,
    }
}

/// Create the database file and product relation, then exit
pub async fn init(database: PathBuf) -> CliResult<()> {
    ProductStore::open(&database).await?;
    tracing::info!(database = %database.display(), "product relation ready");
    Ok(())
}

/// Open the store and serve the HTTP API until terminated
pub async fn serve(host: String, port: u16, database: PathBuf) -> CliResult<()> {
    let config = ServerConfig {
        host,
        port,
        database,
        ..ServerConfig::from_env()
    };

    let store = ProductStore::open(&config.database).await?;
    let server = HttpServer::new(store, config);
    server.start().await?;
    Ok(())
}
