use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub animals: usize,
}

/// Custom error type for API endpoints
///
/// This error type provides consistent error handling across all endpoints,
/// automatically mapping different error types to appropriate HTTP status
/// codes and formatting them as JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// Path parameter did not parse as an integer id
    InvalidId(String),
    /// Request body did not decode into an animal record
    JsonError(serde_json::Error),
    /// POST body carried a zero/unset id
    MissingId,
    /// List requested against an empty store
    NoAnimals,
    /// No animal with this id
    NotFound(i64),
    /// An animal with this id already exists
    AlreadyExists(i64),
    /// Unexpected store failure (reserved; none expected by design)
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidId(raw) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid animal id: expected an integer, got '{}'", raw),
            ),
            ApiError::JsonError(err) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {}", err),
            ),
            ApiError::MissingId => (
                StatusCode::BAD_REQUEST,
                "Animal id is required for creation".to_string(),
            ),
            ApiError::NoAnimals => (
                StatusCode::NOT_FOUND,
                "No animals found in the system".to_string(),
            ),
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Animal with id {} not found", id),
            ),
            ApiError::AlreadyExists(id) => (
                StatusCode::CONFLICT,
                format!("Animal with id {} already exists", id),
            ),
            ApiError::Internal(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal error: {}", err),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Empty => ApiError::NoAnimals,
            StoreError::NotFound(id) => ApiError::NotFound(id),
            StoreError::AlreadyExists(id) => ApiError::AlreadyExists(id),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonError(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}
