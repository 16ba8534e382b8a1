//! Upload flow: validates a submission, runs the analysis generator and hands
//! the result to the session store.
//!
//! Phases: Idle → (Error | Submitting) → (Done | Error).
//! Validation failures never reach the generator, so they return immediately
//! and leave the store untouched. A session may only have one submission in
//! flight; a second one is rejected rather than queued.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{info, warn};

use crate::analysis::generator::AnalysisGenerator;
use crate::errors::{AppError, UploadError};
use crate::models::upload::UploadRequest;
use crate::store::{ResultStore, SessionId, StoredAnalysis};
use crate::upload::form::UploadForm;
use crate::upload::validation::validate_file;

pub const ANALYSIS_FAILED_MESSAGE: &str =
    "An error occurred while analyzing your resume. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    Submitting,
    Error(String),
    Done,
}

// ────────────────────────────────────────────────────────────────────────────
// In-flight tracking
// ────────────────────────────────────────────────────────────────────────────

/// Sessions with a submission currently waiting on the generator.
#[derive(Clone, Default)]
pub struct InFlightSubmissions {
    sessions: Arc<Mutex<HashSet<SessionId>>>,
}

impl InFlightSubmissions {
    /// Claims the session. `None` if it already has a submission in flight.
    pub fn begin(&self, session: SessionId) -> Option<SubmissionGuard> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        if !sessions.insert(session) {
            return None;
        }
        Some(SubmissionGuard {
            sessions: Arc::clone(&self.sessions),
            session,
        })
    }

    #[cfg(test)]
    pub fn is_submitting(&self, session: SessionId) -> bool {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&session)
    }
}

/// Releases the session's claim when dropped, on every exit path.
pub struct SubmissionGuard {
    sessions: Arc<Mutex<HashSet<SessionId>>>,
    session: SessionId,
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.session);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Flow
// ────────────────────────────────────────────────────────────────────────────

/// One submission's trip through the upload flow.
pub struct UploadFlow<'a> {
    generator: &'a dyn AnalysisGenerator,
    store: &'a dyn ResultStore,
    in_flight: &'a InFlightSubmissions,
    max_upload_bytes: u64,
    phase: UploadPhase,
}

impl<'a> UploadFlow<'a> {
    pub fn new(
        generator: &'a dyn AnalysisGenerator,
        store: &'a dyn ResultStore,
        in_flight: &'a InFlightSubmissions,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            generator,
            store,
            in_flight,
            max_upload_bytes,
            phase: UploadPhase::Idle,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    /// The inline message for the upload form, when the flow ended in error.
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            UploadPhase::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Runs the submission to completion.
    ///
    /// On success the session's previous result has been replaced and the
    /// stored entry is returned.
    pub async fn submit(
        &mut self,
        session: SessionId,
        form: UploadForm,
    ) -> Result<StoredAnalysis, AppError> {
        let file = match validate_file(form.file, self.max_upload_bytes) {
            Ok(file) => file,
            Err(e) => return Err(self.reject(e)),
        };

        let Some(_guard) = self.in_flight.begin(session) else {
            return Err(self.reject(UploadError::AlreadySubmitting));
        };

        let request = UploadRequest {
            file,
            job_description: Some(form.job_description).filter(|jd| !jd.trim().is_empty()),
            analysis_mode: form.analysis_mode,
        };
        self.phase = UploadPhase::Submitting;
        info!(
            "Analyzing '{}' ({} bytes, mode={}, job_description={})",
            request.file.name,
            request.file.size,
            request.analysis_mode,
            request.has_job_description()
        );

        let result = match self.generator.generate(&request).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Analysis of '{}' failed: {e}", request.file.name);
                self.phase = UploadPhase::Error(ANALYSIS_FAILED_MESSAGE.to_string());
                return Err(e);
            }
        };

        let entry = StoredAnalysis {
            result,
            file_name: request.file.name,
        };
        if let Err(e) = self.store.put(session, entry.clone()).await {
            self.phase = UploadPhase::Error(ANALYSIS_FAILED_MESSAGE.to_string());
            return Err(e);
        }

        info!("Stored analysis for '{}' (score {})", entry.file_name, entry.result.score);
        self.phase = UploadPhase::Done;
        Ok(entry)
    }

    fn reject(&mut self, e: UploadError) -> AppError {
        info!("Upload rejected: {e}");
        self.phase = UploadPhase::Error(e.to_string());
        AppError::Upload(e)
    }
}
