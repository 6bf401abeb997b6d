//! Input validation
//!
//! Field rules applied before any storage call:
//! - `name`: non-empty after trimming
//! - `price`: strictly greater than zero (NaN fails the comparison too)
//! - `stock`: zero or more
//!
//! Failures are reported as a per-field error list so the HTTP layer can
//! render machine-readable 422 detail, never as an opaque message.

use serde::Serialize;

use crate::product::{NewProduct, ProductPatch};

/// A single violated rule, attributed to the field that violated it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

fn check_name(name: &str) -> Option<FieldError> {
    if name.trim().is_empty() {
        Some(FieldError::new("name", "name must not be empty"))
    } else {
        None
    }
}

fn check_price(price: f64) -> Option<FieldError> {
    // NaN is not > 0.0, so it is rejected here as well
    if price > 0.0 {
        None
    } else {
        Some(FieldError::new("price", "price must be greater than zero"))
    }
}

fn check_stock(stock: i64) -> Option<FieldError> {
    if stock < 0 {
        Some(FieldError::new("stock", "stock must not be negative"))
    } else {
        None
    }
}

/// Validate a create payload; all three fields must be individually valid
pub fn validate_new(product: &NewProduct) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = [
        check_name(&product.name),
        check_price(product.price),
        check_stock(product.stock),
    ]
    .into_iter()
    .flatten()
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a partial-update payload
///
/// Each present field must satisfy its rule; an all-absent patch is itself
/// a validation failure (nothing to update).
pub fn validate_patch(patch: &ProductPatch) -> Result<(), Vec<FieldError>> {
    if patch.is_empty() {
        return Err(vec![FieldError::new(
            "body",
            "at least one of name, price, stock must be provided",
        )]);
    }

    let errors: Vec<FieldError> = [
        patch.name.as_deref().and_then(check_name),
        patch.price.and_then(check_price),
        patch.stock.and_then(check_stock),
    ]
    .into_iter()
    .flatten()
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
