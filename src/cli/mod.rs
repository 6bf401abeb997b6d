//! CLI module for products-api
//!
//! Provides the command-line interface:
//! - init: Create the database file and product relation
//! - serve: Boot the HTTP server and serve until terminated

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run_command, serve};
pub use errors::{CliError, CliResult};

/// Parse arguments, initialize logging, and dispatch
pub async fn run() -> CliResult<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse_args();
    run_command(cli.command).await
}
