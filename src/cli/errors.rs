//! CLI-specific error types
//!
//! All CLI errors are fatal; the process cannot serve without a working
//! store and listener.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Store could not be opened or initialized
    #[error("storage unavailable: {0}")]
    Store(#[from] StoreError),

    /// Listener could not bind or serve
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_message() {
        let err = CliError::from(StoreError::EmptyUpdate);
        assert!(err.to_string().starts_with("storage unavailable"));
    }
}
