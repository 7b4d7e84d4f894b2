//! # Debug Infrastructure
//!
//! Structured logging for the client and its binary.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Log level filter (default: `blog_client=info,blog=info,warn`)
//! - `BLOG_LOG_DIR`: Enables a daily-rotated `blog-client.log` in this directory
//! - `BLOG_LOG_JSON=1`: JSON lines on stderr
//!
//! Every API call runs inside an `api_request` span carrying a fresh `request_id`,
//! so concurrent calls (e.g. the aggregate profile fetch) can be told apart.

pub mod config;
pub mod logger;

pub use config::LogConfig;
