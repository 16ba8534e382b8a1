use std::sync::Arc;

use crate::analysis::generator::AnalysisGenerator;
use crate::config::Config;
use crate::store::ResultStore;
use crate::upload::flow::{InFlightSubmissions, UploadFlow};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable generator. Default: MockAnalysisGenerator.
    pub generator: Arc<dyn AnalysisGenerator>,
    /// Session-scoped results; Redis or in-memory depending on REDIS_URL.
    pub store: Arc<dyn ResultStore>,
    pub in_flight: InFlightSubmissions,
}

impl AppState {
    /// A fresh upload flow bound to this state's generator and store.
    pub fn upload_flow(&self) -> UploadFlow<'_> {
        UploadFlow::new(
            self.generator.as_ref(),
            self.store.as_ref(),
            &self.in_flight,
            self.config.max_upload_bytes,
        )
    }
}
