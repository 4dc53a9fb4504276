//! Error types for the DetectFake analysis service.
//!
//! This module provides structured error handling using thiserror, with a
//! direct mapping onto the service's JSON wire contract: every variant knows
//! its HTTP status and its exact client-facing message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Main error type for analysis requests.
///
/// The three 400-class variants correspond to the upload gate rejections;
/// `Internal` covers anything unexpected and is reported without detail.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// No `image` part could be extracted from the request body.
    #[error("no file uploaded")]
    NoFileUploaded,

    /// The attachment's declared MIME type is not an image type.
    #[error("file must be an image")]
    NotAnImage,

    /// The attachment exceeds the fixed upload ceiling.
    #[error("file size exceeds 10MB limit")]
    FileTooLarge,

    /// Unexpected internal failure; never exposes its cause to the client.
    #[error("failed to analyze image")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalyzeError>;

impl AnalyzeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalyzeError::NoFileUploaded
            | AnalyzeError::NotAnImage
            | AnalyzeError::FileTooLarge => StatusCode::BAD_REQUEST,
            AnalyzeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The exact client-facing message. Part of the wire contract; fixed.
    pub fn user_message(&self) -> &'static str {
        match self {
            AnalyzeError::NoFileUploaded => "no file uploaded",
            AnalyzeError::NotAnImage => "file must be an image",
            AnalyzeError::FileTooLarge => "file size exceeds 10MB limit",
            AnalyzeError::Internal(_) => "failed to analyze image",
        }
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        match &self {
            AnalyzeError::Internal(source) => {
                tracing::error!(error = %source, "internal analysis failure");
            }
            _ => {
                tracing::debug!(error = %self, "rejecting upload");
            }
        }

        let body = json!({ "error": self.user_message() });
        (self.status_code(), axum::Json(body)).into_response()
    }
}
