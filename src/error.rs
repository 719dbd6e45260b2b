use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Text too large: {0}")]
    PayloadTooLarge(String),

    #[error("Backend not configured: {0}")]
    Configuration(String),

    #[error("Translation failed: {0}")]
    Translation(String),

    #[error("Synthesis failed for chunk {chunk_index}: {message}")]
    Synthesis { chunk_index: usize, message: String },

    #[error("Audio assembly failed: {0}")]
    Assembly(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body: a stable category plus a human-readable message, so
/// callers can tell operator-fixable configuration problems from retryable
/// provider failures and from internal defects.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Configuration(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            // provider-side failures are retryable by the caller
            Self::Translation(_) | Self::Synthesis { .. } => StatusCode::BAD_GATEWAY,
            Self::Assembly(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "invalid_request",
            Self::PayloadTooLarge(_) => "payload_too_large",
            Self::Configuration(_) => "configuration",
            Self::Translation(_) => "translation",
            Self::Synthesis { .. } => "synthesis",
            Self::Assembly(_) => "assembly",
            Self::Internal(_) => "internal",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(
            error = %self,
            kind = self.kind(),
            status = %status.as_u16(),
            "Request failed"
        );

        (status, Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
