//! Error types and error handling for the application
//!
//! Handlers return `AppError`, which converts into an HTTP response with a
//! status code and a `{"message": ...}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// Both variants are terminal: they are reported to the caller as-is and
/// never retried. The detail carried by each variant is for logs only; the
/// response body uses a fixed message.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required field was missing or the body could not be decoded
    #[error("invalid data: {0}")]
    InvalidInput(String),

    /// No user matches the requested ID
    #[error("not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Message exposed in the response body
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid data",
            AppError::NotFound(_) => "not found",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Request rejected");

        let status = self.status();
        let body = Json(json!({
            "message": self.public_message(),
        }));

        (status, body).into_response()
    }
}
