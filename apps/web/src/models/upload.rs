use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Depth of analysis requested on the upload form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisMode {
    #[default]
    Quick,
    Detailed,
    Optimize,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 3] = [
        AnalysisMode::Quick,
        AnalysisMode::Detailed,
        AnalysisMode::Optimize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Quick => "Quick",
            AnalysisMode::Detailed => "Detailed",
            AnalysisMode::Optimize => "Optimize",
        }
    }

    /// Short blurb shown next to the radio button.
    pub fn tagline(&self) -> &'static str {
        match self {
            AnalysisMode::Quick => "Fast basic analysis",
            AnalysisMode::Detailed => "Comprehensive review",
            AnalysisMode::Optimize => "Advanced suggestions",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quick" => Ok(AnalysisMode::Quick),
            "detailed" => Ok(AnalysisMode::Detailed),
            "optimize" => Ok(AnalysisMode::Optimize),
            other => Err(format!("unknown analysis mode '{other}'")),
        }
    }
}

/// An uploaded file as declared by the client. `size` is the received byte
/// count; the payload itself is not kept.
#[derive(Debug, Clone)]
pub struct FileDescriptor {
    pub name: String,
    pub size: u64,
    pub content_type: Option<String>,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, content_type: Option<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            content_type,
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.eq_ignore_ascii_case(PDF_MEDIA_TYPE))
            .unwrap_or(false)
    }
}

/// A validated submission, consumed by the analysis generator.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file: FileDescriptor,
    pub job_description: Option<String>,
    pub analysis_mode: AnalysisMode,
}

impl UploadRequest {
    pub fn has_job_description(&self) -> bool {
        self.job_description
            .as_deref()
            .map(|jd| !jd.trim().is_empty())
            .unwrap_or(false)
    }
}
