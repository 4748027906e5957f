//! Error handling module for the sipboard service.
//!
//! Provides centralized error types with mapping to HTTP status codes and response envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const INVALID_INDEX: &str = "INVALID_INDEX";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const CORRUPT_DOCUMENT: &str = "CORRUPT_DOCUMENT";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Rule index outside the current list
    InvalidIndex(i64),
    /// Reading or writing a document failed
    Storage(String),
    /// A document on disk could not be parsed
    CorruptDocument(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidIndex(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::CorruptDocument(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidIndex(_) => codes::INVALID_INDEX,
            AppError::Storage(_) => codes::STORAGE_ERROR,
            AppError::CorruptDocument(_) => codes::CORRUPT_DOCUMENT,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::InvalidIndex(_) => "Invalid index".to_string(),
            AppError::Storage(msg) => msg.clone(),
            AppError::CorruptDocument(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Storage error: {:?}", err);
        AppError::Storage(format!("Storage error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::CorruptDocument(format!("JSON error: {}", err))
    }
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        Self {
            success: false,
            error: error.message(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::new(&self);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_maps_to_bad_request() {
        let err = AppError::InvalidIndex(7);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Invalid index");
        assert_eq!(err.to_string(), "INVALID_INDEX: Invalid index");
    }

    #[test]
    fn test_io_error_is_server_error() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope").into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), codes::STORAGE_ERROR);
    }
}
