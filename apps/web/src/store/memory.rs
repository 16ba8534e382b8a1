use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::AppError;
use crate::store::{ResultStore, SessionId, StoredAnalysis};

struct Slot {
    entry: StoredAnalysis,
    expires_at: DateTime<Utc>,
}

/// Process-local store. Expired slots are skipped on read and swept on write.
pub struct InMemoryResultStore {
    ttl: chrono::Duration,
    slots: RwLock<HashMap<SessionId, Slot>>,
}

impl InMemoryResultStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl: chrono::Duration::from_std(ttl)
                .unwrap_or_else(|_| chrono::Duration::days(365 * 100)),
            slots: RwLock::new(HashMap::new()),
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        let now = Utc::now();
        self.slots
            .read()
            .await
            .values()
            .filter(|slot| slot.expires_at > now)
            .count()
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn put(&self, session: SessionId, entry: StoredAnalysis) -> Result<(), AppError> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut slots = self.slots.write().await;
        let before = slots.len();
        slots.retain(|_, slot| slot.expires_at > now);
        if slots.len() < before {
            debug!("Swept {} expired session results", before - slots.len());
        }
        slots.insert(session, Slot { entry, expires_at });
        Ok(())
    }

    async fn get(&self, session: SessionId) -> Result<Option<StoredAnalysis>, AppError> {
        let slots = self.slots.read().await;
        Ok(slots
            .get(&session)
            .filter(|slot| slot.expires_at > Utc::now())
            .map(|slot| slot.entry.clone()))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::generator::build_mock_result;
    use crate::config::SuggestionRange;
    use crate::models::upload::{AnalysisMode, FileDescriptor, UploadRequest};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_entry(file_name: &str, seed: u64) -> StoredAnalysis {
        let request = UploadRequest {
            file: FileDescriptor::new(file_name, Some("application/pdf".into()), 0),
            job_description: None,
            analysis_mode: AnalysisMode::Quick,
        };
        StoredAnalysis {
            result: build_mock_result(
                &request,
                SuggestionRange::default(),
                &mut StdRng::seed_from_u64(seed),
            ),
            file_name: file_name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_on_empty_store_is_none() {
        let store = InMemoryResultStore::new(Duration::from_secs(60));
        assert!(store.get(SessionId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_then_get_returns_entry() {
        let store = InMemoryResultStore::new(Duration::from_secs(60));
        let session = SessionId::new();
        let entry = make_entry("resume.pdf", 1);

        store.put(session, entry.clone()).await.unwrap();

        assert_eq!(store.get(session).await.unwrap(), Some(entry));
    }

    #[tokio::test]
    async fn test_put_overwrites_previous_entry() {
        let store = InMemoryResultStore::new(Duration::from_secs(60));
        let session = SessionId::new();

        store.put(session, make_entry("first.pdf", 1)).await.unwrap();
        store.put(session, make_entry("second.pdf", 2)).await.unwrap();

        let stored = store.get(session).await.unwrap().unwrap();
        assert_eq!(stored.file_name, "second.pdf");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = InMemoryResultStore::new(Duration::from_secs(60));
        let mine = SessionId::new();
        store.put(mine, make_entry("mine.pdf", 1)).await.unwrap();

        assert!(store.get(SessionId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_zero_ttl_entries_are_never_returned() {
        let store = InMemoryResultStore::new(Duration::ZERO);
        let session = SessionId::new();
        store.put(session, make_entry("resume.pdf", 1)).await.unwrap();

        assert!(store.get(session).await.unwrap().is_none());
        assert_eq!(store.len().await, 0);
    }
}
