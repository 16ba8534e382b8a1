use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use tracing::{debug, warn};

use crate::errors::UploadError;
use crate::models::upload::{AnalysisMode, FileDescriptor};

pub const FIELD_FILE: &str = "file";
pub const FIELD_JOB_DESCRIPTION: &str = "jobDescription";
pub const FIELD_ANALYSIS_MODE: &str = "analysisMode";

/// Raw upload form, before validation. Drag-and-drop and the file picker
/// both post the single `file` part.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub file: Option<FileDescriptor>,
    pub job_description: String,
    pub analysis_mode: AnalysisMode,
    /// Raw `analysisMode` value that did not name a mode, if any.
    pub unrecognised_mode: Option<String>,
}

/// Reads every part of the multipart body. Unknown parts are skipped; an
/// unrecognised mode falls back to the default.
pub async fn read_upload_form(
    mut multipart: Multipart,
    limit_mb: u64,
) -> Result<UploadForm, UploadError> {
    let mut form = UploadForm::default();

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| map_multipart_error(e, limit_mb))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            FIELD_FILE => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(String::from);
                // Only the size is needed; chunks are dropped as they arrive.
                let mut size = 0u64;
                while let Some(chunk) = field
                    .chunk()
                    .await
                    .map_err(|e| map_multipart_error(e, limit_mb))?
                {
                    size += chunk.len() as u64;
                }
                form.file = Some(FileDescriptor::new(file_name, content_type, size));
            }
            FIELD_JOB_DESCRIPTION => {
                form.job_description = field
                    .text()
                    .await
                    .map_err(|e| map_multipart_error(e, limit_mb))?;
            }
            FIELD_ANALYSIS_MODE => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| map_multipart_error(e, limit_mb))?;
                match raw.parse() {
                    Ok(mode) => form.analysis_mode = mode,
                    Err(e) => {
                        warn!("{e}; using {}", AnalysisMode::default());
                        form.unrecognised_mode = Some(raw);
                    }
                }
            }
            other => debug!("Ignoring unexpected upload field '{other}'"),
        }
    }

    Ok(form)
}

fn map_multipart_error(e: MultipartError, limit_mb: u64) -> UploadError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::TooLarge { limit_mb }
    } else {
        UploadError::Malformed(e.body_text())
    }
}
