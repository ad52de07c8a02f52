//! Endpoint configuration.
//!
//! Loaded from environment variables with defaults:
//! - `LAUNCHSPARK_API_URL`: API base URL (default: `https://api.launchspark.in/api`)
//! - `LAUNCHSPARK_TIMEOUT_SECS`: request timeout in seconds (default: none)

use std::time::Duration;

use crate::error::ClientError;

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.launchspark.in/api";

const USER_AGENT: &str = concat!("launchspark-client/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`HttpEndpoint`](crate::HttpEndpoint).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL; operation paths are appended to it.
    pub base_url: String,
    /// Per-request timeout. `None` waits for as long as the transport does.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: USER_AGENT.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for unset or unparsable values.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("LAUNCHSPARK_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        let timeout = std::env::var("LAUNCHSPARK_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            base_url,
            timeout,
            ..Self::default()
        }
    }

    /// Use `base_url` instead of the configured one.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The base URL with trailing slashes removed.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the URL is empty or not http(s).
    pub fn normalized_base_url(&self) -> Result<String, ClientError> {
        let base = self.base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(ClientError::Config("API base URL is empty".to_owned()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "API base URL must start with http:// or https://, got '{base}'"
            )));
        }
        Ok(base.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout, None);
        assert!(cfg.user_agent.starts_with("launchspark-client/"));
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let cfg = ClientConfig::default().with_base_url("http://localhost:8080/api//");
        assert_eq!(cfg.normalized_base_url().unwrap(), "http://localhost:8080/api");
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let cfg = ClientConfig::default().with_base_url("  / ");
        assert!(matches!(cfg.normalized_base_url(), Err(ClientError::Config(_))));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let cfg = ClientConfig::default().with_base_url("ftp://example.com");
        let err = cfg.normalized_base_url().unwrap_err();
        assert!(err.to_string().contains("ftp://example.com"));
    }
}
