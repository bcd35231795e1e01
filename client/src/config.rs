//! Client configuration, read from the environment.
//!
//! Mirrors the deployment knobs of the original frontend: the API base URL
//! (empty means same-origin relative URLs behind a reverse proxy), the
//! per-request timeout ceiling and the GET retry cap.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const BASE_URL_ENV: &str = "MINDWELL_API_BASE_URL";
const TIMEOUT_ENV: &str = "MINDWELL_HTTP_TIMEOUT_MS";
const GET_RETRIES_ENV: &str = "MINDWELL_HTTP_GET_RETRIES";
const TOKEN_FILE_ENV: &str = "MINDWELL_TOKEN_FILE";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(12_000);
pub const DEFAULT_GET_RETRIES: u32 = 2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Runtime configuration for [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the API lives under. Empty keeps built URLs relative,
    /// which only makes sense behind a same-origin proxy.
    pub base_url: String,
    /// Per-request timeout ceiling, composed with caller cancellation.
    pub timeout: Duration,
    /// Maximum retries for idempotent GET requests. POSTs never retry.
    pub max_get_retries: u32,
    /// Optional file the bearer token is persisted to across restarts.
    pub token_path: Option<PathBuf>,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_get_retries: DEFAULT_GET_RETRIES,
            token_path: None,
        }
    }

    /// Load configuration from `.env` and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url = env::var(BASE_URL_ENV).unwrap_or_default();
        let timeout = match env::var(TIMEOUT_ENV) {
            Ok(raw) => Duration::from_millis(parse_number(TIMEOUT_ENV, &raw)?),
            Err(_) => DEFAULT_TIMEOUT,
        };
        let max_get_retries = match env::var(GET_RETRIES_ENV) {
            Ok(raw) => parse_number(GET_RETRIES_ENV, &raw)? as u32,
            Err(_) => DEFAULT_GET_RETRIES,
        };
        let token_path = env::var(TOKEN_FILE_ENV).ok().map(PathBuf::from);

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            max_get_retries,
            token_path,
        })
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn max_get_retries(mut self, retries: u32) -> Self {
        self.max_get_retries = retries;
        self
    }

    pub fn token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }
}

fn parse_number(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: raw.to_string(),
    })
}
