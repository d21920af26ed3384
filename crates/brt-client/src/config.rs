//! Client configuration

use crate::error::{ClientError, ClientResult};
use reqwest::Url;
use std::env;
use std::time::Duration;

/// Base URL used when `BRT_API_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Request timeout used when `BRT_API_TIMEOUT_SECS` is not set
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the service lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    /// Config for the given base URL with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from the environment, honoring a `.env` file
    pub fn from_env() -> ClientResult<Self> {
        dotenvy::dotenv().ok();

        let base_url = env::var("BRT_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = match env::var("BRT_API_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ClientError::Config(format!("BRT_API_TIMEOUT_SECS '{}': {}", raw, e))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self::new(base_url).with_timeout(Duration::from_secs(timeout)))
    }

    /// Absolute URL for an API endpoint such as `["cdr", "12345"]`
    ///
    /// Each segment is percent-encoded on its own, so identifiers may
    /// contain `/`, `?` or `#`.
    pub fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::Config(format!("base URL '{}': {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("base URL '{}' cannot have a path", self.base_url)))?
            .pop_if_empty()
            .push("api")
            .extend(segments);

        Ok(url)
    }
}
