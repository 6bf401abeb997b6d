//! Product HTTP Routes
//!
//! One handler per operation (list, get, create, update, delete); each is a
//! state-free orchestration of validation, gateway calls, and error
//! translation.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use super::errors::{ApiError, ApiResult};
use crate::product::{NewProduct, Product, ProductPatch};
use crate::store::ProductStore;
use crate::validation;

/// State shared across handlers
pub struct ApiState {
    pub store: ProductStore,
}

/// Confirmation body for operations without an entity response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create product routes
pub fn product_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/products", get(list_products_handler))
        .route("/products", post(create_product_handler))
        .route("/products/{id}", get(get_product_handler))
        .route("/products/{id}", put(update_product_handler))
        .route("/products/{id}", delete(delete_product_handler))
        .with_state(state)
}

async fn list_products_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<Product>>> {
    let products = state.store.list_all().await?;
    Ok(Json(products))
}

async fn get_product_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Product>> {
    match state.store.get_by_id(id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError::NotFound(id)),
    }
}

async fn create_product_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<NewProduct>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    validation::validate_new(&payload).map_err(ApiError::Validation)?;
    let product = state.store.insert(&payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Fixed step order: existence check, then field validation, then the
/// mutation, then a re-read so the response reflects applied changes.
/// A missing id always reports 404, even when the body is also invalid.
async fn update_product_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
    Json(patch): Json<ProductPatch>,
) -> ApiResult<Json<Product>> {
    if state.store.get_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound(id));
    }

    validation::validate_patch(&patch).map_err(ApiError::Validation)?;
    state.store.update(id, &patch).await?;

    // The row can disappear between update and re-read under a concurrent
    // delete; report that as 404 like any other absence.
    match state.store.get_by_id(id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(ApiError::NotFound(id)),
    }
}

async fn delete_product_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    if state.store.get_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound(id));
    }

    state.store.delete_by_id(id).await?;
    Ok(Json(MessageResponse {
        message: "product deleted".to_string(),
    }))
}
