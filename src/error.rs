//! Error types for the REST API.

use crate::resolver::ValidationError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;


/// API error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
}

/// API error types.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body or query string does not match the schema.
    #[error("Invalid request: {0}")]
    Schema(String),

    /// Order request failed semantic validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Brokerage call failed.
    #[error("Broker error: {0}")]
    Broker(String),
}

impl ApiError {
    /// HTTP status and machine-readable code for this error.
    #[must_use]
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Schema(_) => (StatusCode::UNPROCESSABLE_ENTITY, "SCHEMA_ERROR"),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Broker(_) => (StatusCode::BAD_GATEWAY, "BROKER_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Schema(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Schema(rejection.body_text())
    }
}

impl From<alpaca_client::Error> for ApiError {
    fn from(err: alpaca_client::Error) -> Self {
        match err {
            alpaca_client::Error::NotFound(message) => ApiError::NotFound(message),
            invalid @ alpaca_client::Error::InvalidPathSegment(_) => {
                ApiError::Schema(invalid.to_string())
            }
            other => ApiError::Broker(other.to_string()),
        }
    }
}
