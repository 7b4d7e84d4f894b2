//! Logging configuration from environment variables

use std::path::PathBuf;

/// Library and `blog` binary at info, dependencies at warn.
pub const DEFAULT_FILTER: &str = "blog_client=info,blog=info,warn";
const VERBOSE_FILTER: &str = "blog_client=debug,blog=debug,info";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level filter (e.g., "blog_client=debug,blog=debug,info")
    pub log_level: String,
    /// Directory for the daily-rotated log file; `None` logs to stderr only
    pub log_dir: Option<PathBuf>,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_FILTER.to_string(),
            log_dir: None,
            json: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string()),
            log_dir: std::env::var("BLOG_LOG_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            json: std::env::var("BLOG_LOG_JSON")
                .map(|v| v == "1")
                .unwrap_or(false),
        }
    }

    /// Raise the filter to debug for the client crate and binary (`--verbose`)
    pub fn verbose(mut self) -> Self {
        self.log_level = VERBOSE_FILTER.to_string();
        self
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
