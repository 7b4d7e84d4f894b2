//! # Blog Client - Library Root
//!
//! Typed, asynchronous access layer for the blog REST backend, plus the client-side
//! session contract (bearer token + cached user record in persistent storage).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              blog-client (this crate)                  │
//! ├────────────────────────────────────────────────────────┤
//! │  Reqwest       - HTTP client                           │
//! │  Tokio         - Async runtime                         │
//! │  Serde         - JSON DTOs (shared crate)              │
//! │  Tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP + Authorization: Bearer
//!          ▼
//! ┌─────────────────────────┐
//! │  Blog backend /api/v1   │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **config**: `ClientConfig` from environment variables
//! - **core**: `ApiError`, `Result<T>`, and the `BlogApi` service trait
//! - **services**:
//!   - `api`: the `ApiClient` façade (auth, posts, likes, comments, profile, search)
//!   - `session`: `SessionStore` with memory and file implementations
//!   - `cancel`: `CancelToken`
//! - **debug**: logging setup
//! - **utils**: input validation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use blog_client::config::ClientConfig;
//! use blog_client::services::api::ApiClient;
//! use blog_client::services::session::MemorySessionStore;
//!
//! # async fn demo() -> blog_client::core::Result<()> {
//! let api = ApiClient::new(&ClientConfig::default(), Arc::new(MemorySessionStore::new()));
//!
//! let session = api.login("ada@example.com", "hunter2").await?;
//! assert!(api.is_authenticated());
//!
//! let post = api.create_post("Hello from Rust", None).await?;
//! api.like(post.id).await?;
//! api.like(post.id).await?; // settles, no second like
//!
//! api.logout()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p blog-client
//! ```
//!
//! Integration tests in `tests/` run the client against a `wiremock` backend.

pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

pub use crate::core::{ApiError, BlogApi, Result};
pub use services::api::ApiClient;
pub use services::cancel::CancelToken;
pub use services::session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
