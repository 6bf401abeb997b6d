//! CLI argument definitions using clap
//!
//! Commands:
//! - products-api init --database <path>
//! - products-api serve --host <host> --port <port> --database <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// products-api - Inventory record service exposing CRUD over products
#[derive(Parser, Debug)]
#[command(name = "products-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database file and product relation, then exit
    Init {
        /// Path to the SQLite database
        #[arg(long, default_value = "products.db")]
        database: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Host to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind
        #[arg(long, default_value_t = 8000)]
        port: u16,

        /// Path to the SQLite database
        #[arg(long, default_value = "products.db")]
        database: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
