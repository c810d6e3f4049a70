//! Error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{responses::ApiResponse, store::StoreError};

/// Message returned when the `{id}` path segment is not an integer
pub const INVALID_USER_ID: &str = "Invalid user ID";

/// Message returned when a request body cannot be decoded
pub const INVALID_PAYLOAD: &str = "Invalid request payload";

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error (binding the listener, serving connections)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store operation failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed path parameter or request body
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Known path, unsupported method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Request body exceeded the configured limit
    #[error("Payload too large")]
    PayloadTooLarge,

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl Error {
    /// HTTP status code this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Store(StoreError::NotFound(_)) | Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Error::Config(_) | Error::Io(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            Error::Store(StoreError::NotFound(id)) => {
                tracing::debug!(user_id = id, "user not found");
                "User not found".to_string()
            }
            Error::NotFound(msg) | Error::BadRequest(msg) => msg,
            Error::MethodNotAllowed => "Method not allowed".to_string(),
            Error::PayloadTooLarge => "Payload too large".to_string(),
            Error::Config(e) => {
                tracing::error!("Configuration error: {}", e);
                "Internal server error".to_string()
            }
            Error::Io(e) => {
                tracing::error!("I/O error: {}", e);
                "Internal server error".to_string()
            }
            Error::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        };

        (status, Json(ApiResponse::failure(message))).into_response()
    }
}

// Manual From implementations for boxed errors
impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
