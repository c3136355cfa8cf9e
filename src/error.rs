//! Error types for the listings service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::listings::RepoError;
use crate::models::ErrorResponse;

// == Listings Error Enum ==
/// Unified error type for the listings service.
#[derive(Error, Debug)]
pub enum ListingsError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Cache invalidation pattern failed to compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A listing repository query failed
    #[error("Repository error: {0}")]
    Repository(#[from] RepoError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ListingsError {
    fn into_response(self) -> Response {
        let status = match &self {
            ListingsError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ListingsError::InvalidPattern(_) => StatusCode::BAD_REQUEST,
            ListingsError::Repository(RepoError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ListingsError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the listings service.
pub type Result<T> = std::result::Result<T, ListingsError>;
