//! # API Errors
//!
//! Error taxonomy for the HTTP API. Exactly one typed outcome per failed
//! request: validation detail comes back as 422, a missing id as 404, and
//! storage failures as an opaque 500 (detail goes to the log only).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;
use crate::validation::FieldError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Input failed a field constraint, or an update supplied zero fields
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// Referenced product does not exist
    #[error("product with id {0} not found")]
    NotFound(i64),

    /// Underlying storage failed; no internal detail is leaked
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "storage operation failed");
        ApiError::Internal
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        let code = err.status_code().as_u16();
        let details = match &err {
            ApiError::Validation(errors) => errors.clone(),
            _ => Vec::new(),
        };
        Self {
            error: err.to_string(),
            code,
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
