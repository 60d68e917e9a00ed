//! Client configuration.

use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Default path of the token refresh endpoint.
pub const DEFAULT_REFRESH_PATH: &str = "/auth/refresh";

/// Default deadline for the refresh call. A stalled refresh would hang
/// every queued caller, so the wait is bounded.
pub const DEFAULT_REFRESH_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while building a client.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL did not parse.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The base URL parsed but cannot have paths joined onto it.
    #[error("base URL cannot serve as a base: {0}")]
    NotABase(String),
}

/// Configuration for an [`AuthClient`](crate::AuthClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    /// Path of the refresh endpoint, relative to the base URL.
    pub refresh_path: String,
    /// Deadline for the refresh call itself.
    pub refresh_timeout: Duration,
}

impl ClientConfig {
    /// Parse and normalize the base URL. A trailing slash is ensured so
    /// joined paths extend the base path instead of replacing it.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut normalized = base_url.trim_end_matches('/').to_string();
        normalized.push('/');
        let base_url = Url::parse(&normalized)?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::NotABase(base_url.to_string()));
        }
        Ok(Self {
            base_url,
            refresh_path: DEFAULT_REFRESH_PATH.to_string(),
            refresh_timeout: DEFAULT_REFRESH_TIMEOUT,
        })
    }

    /// Override the refresh endpoint path.
    #[must_use]
    pub fn with_refresh_path(mut self, path: impl Into<String>) -> Self {
        self.refresh_path = path.into();
        self
    }

    /// Override the refresh deadline.
    #[must_use]
    pub fn with_refresh_timeout(mut self, timeout: Duration) -> Self {
        self.refresh_timeout = timeout;
        self
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a relative path and query against the base URL.
    pub fn endpoint_url(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Url, url::ParseError> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }
}
