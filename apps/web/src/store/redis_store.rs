use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use tracing::info;

use crate::errors::AppError;
use crate::store::{ResultStore, SessionId, StoredAnalysis};

const KEY_PREFIX: &str = "rescan:session";
/// Hash fields, named after the browser session-storage keys the results
/// views were originally fed from.
const FIELD_RESULT: &str = "analysisResults";
const FIELD_FILE_NAME: &str = "uploadedFileName";

/// One hash per session, expired by Redis after the session TTL.
#[derive(Clone)]
pub struct RedisResultStore {
    conn: MultiplexedConnection,
    ttl_secs: u64,
}

impl RedisResultStore {
    /// Opens a multiplexed connection shared by all handlers.
    pub async fn connect(redis_url: &str, ttl: Duration) -> Result<Self> {
        info!("Connecting to Redis...");

        let client = redis::Client::open(redis_url)?;
        let conn = client.get_multiplexed_async_connection().await?;

        info!("Redis connection established");
        Ok(Self {
            conn,
            ttl_secs: ttl.as_secs().max(1),
        })
    }
}

fn session_key(session: SessionId) -> String {
    format!("{KEY_PREFIX}:{session}")
}

fn decode(
    raw_result: Option<String>,
    raw_file_name: Option<String>,
) -> Result<Option<StoredAnalysis>, AppError> {
    let Some(raw_result) = raw_result else {
        return Ok(None);
    };
    Ok(Some(StoredAnalysis {
        result: serde_json::from_str(&raw_result)?,
        file_name: raw_file_name.unwrap_or_default(),
    }))
}

fn encode(entry: &StoredAnalysis) -> Result<String, AppError> {
    Ok(serde_json::to_string(&entry.result)?)
}

#[async_trait]
impl ResultStore for RedisResultStore {
    async fn put(&self, session: SessionId, entry: StoredAnalysis) -> Result<(), AppError> {
        let key = session_key(session);
        let payload = encode(&entry)?;

        let mut conn = self.conn.clone();
        redis::pipe()
            .atomic()
            .cmd("HSET")
            .arg(&key)
            .arg(FIELD_RESULT)
            .arg(payload)
            .arg(FIELD_FILE_NAME)
            .arg(&entry.file_name)
            .ignore()
            .cmd("EXPIRE")
            .arg(&key)
            .arg(self.ttl_secs)
            .ignore()
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn get(&self, session: SessionId) -> Result<Option<StoredAnalysis>, AppError> {
        let mut conn = self.conn.clone();
        let (raw_result, raw_file_name) = redis::cmd("HMGET")
            .arg(session_key(session))
            .arg(FIELD_RESULT)
            .arg(FIELD_FILE_NAME)
            .query_async::<_, (Option<String>, Option<String>)>(&mut conn)
            .await?;
        decode(raw_result, raw_file_name)
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::AnalysisResult;

    #[test]
    fn test_session_key_is_namespaced() {
        let session: SessionId = "6f9619ff-8b86-d011-b42d-00c04fc964ff".parse().unwrap();
        assert_eq!(
            session_key(session),
            "rescan:session:6f9619ff-8b86-d011-b42d-00c04fc964ff"
        );
    }

    #[test]
    fn test_decode_without_result_is_absent() {
        assert!(decode(None, Some("resume.pdf".into())).unwrap().is_none());
    }

    #[test]
    fn test_encoded_result_decodes_with_file_name() {
        let result: AnalysisResult = serde_json::from_value(serde_json::json!({
            "score": 77,
            "analysis": "ok",
            "suggestions": ["one"],
            "professionalSuggestions": {
                "structure": [], "formatting": [], "content": [], "language": [], "sections": []
            },
            "keywordAnalysis": {
                "foundKeywords": [], "missingKeywords": [], "keywordDensity": 2.3,
                "sectionMapping": [{"section": "Skills", "keywords": ["Rust"]}],
                "industryComparison": ""
            },
            "aiImprovements": {
                "specificChanges": [], "wordChoices": [],
                "sentenceRestructuring": [], "quantifiableAchievements": []
            }
        }))
        .unwrap();
        let entry = StoredAnalysis {
            result,
            file_name: "cv.pdf".to_string(),
        };

        let decoded = decode(Some(encode(&entry).unwrap()), Some("cv.pdf".into()))
            .unwrap()
            .unwrap();
        assert_eq!(decoded, entry);
    }

    #[test]
    fn test_decode_rejects_corrupt_json() {
        let err = decode(Some("{not json".into()), None).unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
    }
}
