use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Rejections raised while validating an uploaded resume.
/// The display strings are shown verbatim next to the upload form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please upload a PDF file.")]
    MissingFile,

    #[error("Please upload a PDF file only.")]
    NotPdf,

    #[error("File size must be less than {limit_mb}MB.")]
    TooLarge { limit_mb: u64 },

    #[error("An analysis is already in progress. Please wait for it to finish.")]
    AlreadySubmitting,

    #[error("Malformed upload: {0}")]
    Malformed(String),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("Analysis failed: {0}")]
    Generation(String),

    #[error("Result store error: {0}")]
    Store(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::Store(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Store(format!("stored result is not valid JSON: {e}"))
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upload(UploadError::AlreadySubmitting) => StatusCode::CONFLICT,
            AppError::Upload(_) => StatusCode::BAD_REQUEST,
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AppError::NotFound(msg) => ("NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::Upload(UploadError::AlreadySubmitting) => (
                "ANALYSIS_IN_PROGRESS",
                UploadError::AlreadySubmitting.to_string(),
            ),
            AppError::Upload(e) => ("UPLOAD_REJECTED", e.to_string()),
            AppError::Generation(msg) => {
                tracing::error!("Generation error: {msg}");
                (
                    "ANALYSIS_FAILED",
                    "An error occurred while analyzing your resume. Please try again.".to_string(),
                )
            }
            AppError::Store(msg) => {
                tracing::error!("Store error: {msg}");
                (
                    "STORE_ERROR",
                    "A session storage error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (self.status(), body).into_response()
    }
}
