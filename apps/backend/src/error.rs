//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use exam_core::CoreError;
use exam_pdf::{ExportError, ExportErrorKind};
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    retryable: bool,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Export(err) => {
                let status = match err.kind() {
                    ExportErrorKind::BrowserUnsupported => StatusCode::NOT_IMPLEMENTED,
                    ExportErrorKind::GenerationFailed | ExportErrorKind::DownloadFailed => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, err.kind().as_str())
            }
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Export(err) => err.is_retryable(),
            ApiError::BadRequest(_) => false,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_code();

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            retryable: self.is_retryable(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
