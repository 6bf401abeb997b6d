//! products-api - an inventory record service over SQLite
//!
//! CRUD over a single `Product` entity, exposed as a JSON HTTP API
//! for front-end clients running on other origins.

pub mod cli;
pub mod http;
pub mod product;
pub mod store;
pub mod validation;
