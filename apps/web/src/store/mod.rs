//! Transient Result Store: holds the most recent analysis per browser session.
//!
//! Backends implement `ResultStore`; `AppState` carries an `Arc<dyn ResultStore>`
//! chosen at startup (Redis when `REDIS_URL` is set, process memory otherwise).
//! Both overwrite on `put` and expire entries after the configured session TTL.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;

pub mod memory;
pub mod redis_store;

pub use memory::InMemoryResultStore;
pub use redis_store::RedisResultStore;

/// Opaque identifier of one browser session, carried in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// The two values the upload flow hands to the results views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAnalysis {
    pub result: AnalysisResult,
    pub file_name: String,
}

#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Replaces whatever the session held before.
    async fn put(&self, session: SessionId, entry: StoredAnalysis) -> Result<(), AppError>;

    async fn get(&self, session: SessionId) -> Result<Option<StoredAnalysis>, AppError>;

    /// Backend label, logged at startup and reported by /health.
    fn backend(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_round_trips_through_cookie_text() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_session_id_rejects_garbage() {
        assert!("not-a-session".parse::<SessionId>().is_err());
    }
}
