//! Storage module
//!
//! `ProductStore` is the sole component permitted to issue SQL. Everything
//! else in the crate goes through it.

mod error;
mod gateway;

pub use error::{StoreError, StoreResult};
pub use gateway::ProductStore;
