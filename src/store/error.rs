//! Storage error types
//!
//! Raw driver errors are wrapped here at the gateway boundary and never
//! leak into API responses.

use thiserror::Error;

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database failure (I/O, constraint violation, disk full)
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Partial update called with no fields to apply
    #[error("update requires at least one field")]
    EmptyUpdate,
}
