use crate::config::upload_limit_mb;
use crate::errors::UploadError;
use crate::models::upload::FileDescriptor;

/// Single gate for every file the upload form receives.
///
/// Order matters: a missing file is reported before type, type before size.
/// Browsers post an empty, unnamed part when nothing was selected, so that
/// counts as missing too.
pub fn validate_file(
    file: Option<FileDescriptor>,
    max_bytes: u64,
) -> Result<FileDescriptor, UploadError> {
    let file = match file {
        Some(f) if !(f.name.trim().is_empty() && f.size == 0) => f,
        _ => return Err(UploadError::MissingFile),
    };

    if !file.is_pdf() {
        return Err(UploadError::NotPdf);
    }

    if file.size > max_bytes {
        return Err(UploadError::TooLarge {
            limit_mb: upload_limit_mb(max_bytes),
        });
    }

    Ok(file)
}
