//! Product data model
//!
//! `Product` is the persisted entity. `NewProduct` and `ProductPatch` are the
//! transient input shapes accepted at the API boundary; they never reach
//! storage without passing through the validation layer first.

use serde::{Deserialize, Serialize};

/// A persisted product row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    /// System-assigned, immutable, never reused within a database lifetime
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

/// Create input: all fields required
///
/// Missing fields are rejected during deserialization, before validation runs.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

/// Partial-update input: any non-empty subset of the three fields
///
/// Absent fields are left untouched by the update. An all-absent patch is a
/// validation failure, not a storage no-op.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: Option<i64>,
}

impl ProductPatch {
    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.stock.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch() {
        let patch = ProductPatch::default();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_single_field_patch_is_not_empty() {
        let patch = ProductPatch {
            price: Some(45.0),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_patch_deserializes_missing_fields_as_none() {
        let patch: ProductPatch = serde_json::from_str(r#"{"price": 45.0}"#).unwrap();
        assert_eq!(patch.price, Some(45.0));
        assert!(patch.name.is_none());
        assert!(patch.stock.is_none());
    }

    #[test]
    fn test_new_product_requires_all_fields() {
        let result: Result<NewProduct, _> = serde_json::from_str(r#"{"name": "Laptop"}"#);
        assert!(result.is_err());
    }
}
