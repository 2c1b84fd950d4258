//! Error types for the Alpaca client.

use thiserror::Error;


/// Client error types.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Query string encoding failed.
    #[error("Query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Path parameter that cannot be used as a URL segment.
    #[error("Invalid path segment: {0:?}")]
    InvalidPathSegment(String),

    /// API key or secret was empty.
    #[error("Missing Alpaca credentials")]
    MissingCredentials,

    /// API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from API.
        message: String,
    },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}
