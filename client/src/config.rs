//! # Client Configuration
//!
//! Settings loaded from environment variables. Every value has a default, so an empty
//! environment yields a client pointed at a local development backend.
//!
//! | Variable | Default |
//! |---|---|
//! | `BLOG_API_URL` | `http://localhost:3000/api/v1` |
//! | `BLOG_API_TIMEOUT_SECS` | `10` |
//! | `BLOG_SESSION_FILE` | `.blog-session.json` |
//!
//! ```rust,no_run
//! use blog_client::config::ClientConfig;
//!
//! let config = ClientConfig::from_env()?;
//! config.validate()?;
//! # Ok::<(), blog_client::config::ConfigError>(())
//! ```

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Base URL of a local development backend, including the version prefix.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SESSION_FILE: &str = ".blog-session.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid number: {value}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("BLOG_API_URL must be an absolute http(s) URL: {0}")]
    InvalidBaseUrl(String),

    #[error("BLOG_API_TIMEOUT_SECS must be between 1 and 300, got {0}")]
    TimeoutOutOfRange(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Versioned API prefix every endpoint path is appended to.
    pub base_url: String,

    /// Whole-request timeout applied by the HTTP client.
    pub timeout: Duration,

    /// Where the file-backed session store keeps `token` and `user`.
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl ClientConfig {
    /// Config for an explicit base URL with default timeout and session file.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("BLOG_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match env::var("BLOG_API_TIMEOUT_SECS") {
            Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                name: "BLOG_API_TIMEOUT_SECS",
                value,
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let session_file = env::var("BLOG_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            session_file,
        })
    }

    /// Fail fast on values the client cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|_| ConfigError::InvalidBaseUrl(self.base_url.clone()))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }

        let secs = self.timeout.as_secs();
        if !(1..=300).contains(&secs) {
            return Err(ConfigError::TimeoutOutOfRange(secs));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = ClientConfig::with_base_url("ftp://example.com/api");
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl("ftp://example.com/api".to_string()))
        );

        let relative = ClientConfig::with_base_url("/api/v1");
        assert!(relative.validate().is_err());
    }

    #[test]
    fn test_rejects_timeout_out_of_range() {
        let config = ClientConfig {
            timeout: Duration::from_secs(0),
            ..ClientConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TimeoutOutOfRange(0)));
    }
}
