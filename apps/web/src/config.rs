use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

pub const BYTES_PER_MB: u64 = 1024 * 1024;
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * BYTES_PER_MB;

/// The upload copy states the limit in whole MB, so the limit must be one.
pub fn upload_limit(max_bytes: u64) -> Result<u64> {
    if max_bytes == 0 || max_bytes % BYTES_PER_MB != 0 {
        bail!("MAX_UPLOAD_BYTES ({max_bytes}) must be a positive multiple of {BYTES_PER_MB}");
    }
    Ok(max_bytes)
}

/// Whole MB in `max_bytes`; exact for any value `upload_limit` accepts.
pub fn upload_limit_mb(max_bytes: u64) -> u64 {
    max_bytes / BYTES_PER_MB
}

/// Inclusive bounds on how many items of the suggestion template a mock
/// result carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionRange {
    pub min: usize,
    pub max: usize,
}

impl SuggestionRange {
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min == 0 {
            bail!("SUGGESTIONS_MIN must be at least 1");
        }
        if min > max {
            bail!("SUGGESTIONS_MIN ({min}) must not exceed SUGGESTIONS_MAX ({max})");
        }
        Ok(Self { min, max })
    }
}

impl Default for SuggestionRange {
    fn default() -> Self {
        Self { min: 3, max: 6 }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default, so an empty environment yields a runnable
/// in-memory setup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// When set, analysis results live in Redis instead of process memory.
    pub redis_url: Option<String>,
    pub analysis_delay: Duration,
    pub max_upload_bytes: u64,
    pub session_ttl: Duration,
    pub suggestion_range: SuggestionRange,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            redis_url: None,
            analysis_delay: Duration::from_millis(2000),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            session_ttl: Duration::from_secs(24 * 60 * 60),
            suggestion_range: SuggestionRange::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let suggestion_range = SuggestionRange::new(
            parse_env("SUGGESTIONS_MIN", defaults.suggestion_range.min)?,
            parse_env("SUGGESTIONS_MAX", defaults.suggestion_range.max)?,
        )?;

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            redis_url: std::env::var("REDIS_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            analysis_delay: Duration::from_millis(parse_env(
                "ANALYSIS_DELAY_MS",
                defaults.analysis_delay.as_millis() as u64,
            )?),
            max_upload_bytes: upload_limit(parse_env(
                "MAX_UPLOAD_BYTES",
                defaults.max_upload_bytes,
            )?)?,
            session_ttl: Duration::from_secs(parse_env(
                "SESSION_TTL_SECS",
                defaults.session_ttl.as_secs(),
            )?),
            suggestion_range,
        })
    }

    /// Upload limit rendered the way the form copy expects ("10MB").
    pub fn max_upload_mb(&self) -> u64 {
        upload_limit_mb(self.max_upload_bytes)
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
