//! Storage gateway
//!
//! Owns the SQLite connection pool and exposes the five storage operations
//! (list, get-by-id, insert, partial-update, delete). Each operation is a
//! single round trip; connections are acquired from the pool per statement
//! and released on every exit path.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};

use super::error::{StoreError, StoreResult};
use crate::product::{NewProduct, Product, ProductPatch};

/// Gateway to the product relation
///
/// Cheap to clone; clones share the same pool.
#[derive(Clone)]
pub struct ProductStore {
    pool: SqlitePool,
}

impl ProductStore {
    /// Open (creating if missing) the database at `path` and ensure the
    /// product relation exists
    ///
    /// The path is always threaded in by the caller so tests can point at a
    /// throwaway per-run file.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Create the product relation if it does not already exist
    ///
    /// Idempotent; safe to call repeatedly and before any other operation.
    pub async fn init_schema(&self) -> StoreResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                price REAL NOT NULL,
                stock INTEGER NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Return every row, in storage-native order (no ordering guarantee)
    pub async fn list_all(&self) -> StoreResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, Product>("SELECT id, name, price, stock FROM products")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Exact-match lookup; absence is a first-class `None`, not an error
    pub async fn get_by_id(&self, id: i64) -> StoreResult<Option<Product>> {
        let row = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, stock FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Persist a new row and return the full entity including the generated id
    pub async fn insert(&self, draft: &NewProduct) -> StoreResult<Product> {
        let row = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price, stock) VALUES (?, ?, ?)
             RETURNING id, name, price, stock",
        )
        .bind(&draft.name)
        .bind(draft.price)
        .bind(draft.stock)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Apply exactly the supplied fields to the row with the given id
    ///
    /// The assignment list is composed dynamically from the present fields,
    /// always parameter-bound. Zero rows affected is not an error here;
    /// existence checking is the caller's responsibility.
    pub async fn update(&self, id: i64, patch: &ProductPatch) -> StoreResult<()> {
        if patch.is_empty() {
            return Err(StoreError::EmptyUpdate);
        }

        let mut query: QueryBuilder<'_, Sqlite> = QueryBuilder::new("UPDATE products SET ");
        let mut assignments = query.separated(", ");
        if let Some(name) = &patch.name {
            assignments.push("name = ");
            assignments.push_bind_unseparated(name.as_str());
        }
        if let Some(price) = patch.price {
            assignments.push("price = ");
            assignments.push_bind_unseparated(price);
        }
        if let Some(stock) = patch.stock {
            assignments.push("stock = ");
            assignments.push_bind_unseparated(stock);
        }
        query.push(" WHERE id = ");
        query.push_bind(id);

        query.build().execute(&self.pool).await?;
        Ok(())
    }

    /// Remove the row; no-op-safe when the id is already absent
    pub async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
