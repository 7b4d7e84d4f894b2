//! # Services Module
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                 Consumer (CLI / UI)                │
//! │                                                    │
//! │  ┌──────────────────┐       ┌──────────────────┐   │
//! │  │  ApiClient       │──────▶│  SessionStore    │   │
//! │  │  (api/)          │       │  (session.rs)    │   │
//! │  └────────┬─────────┘       └──────────────────┘   │
//! └───────────┼────────────────────────────────────────┘
//!             │ HTTP/JSON + Bearer
//!             ▼
//! ┌─────────────────────────┐
//! │  Blog backend /api/v1   │
//! │  /auth/*  /posts/*      │
//! └─────────────────────────┘
//! ```
//!
//! - **[`api`]**: the `ApiClient` façade
//! - **[`session`]**: `SessionStore` trait with memory and file implementations
//! - **[`cancel`]**: `CancelToken` for aborting in-flight calls
//!
//! ### Usage Pattern
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use blog_client::config::ClientConfig;
//! use blog_client::services::api::ApiClient;
//! use blog_client::services::session::FileSessionStore;
//!
//! # async fn demo() -> blog_client::core::Result<()> {
//! let config = ClientConfig::default();
//! let api = ApiClient::new(&config, Arc::new(FileSessionStore::new(&config.session_file)));
//!
//! api.login("ada@example.com", "hunter2").await?;
//! for post in api.list_posts().await? {
//!     println!("{}: {}", post.id, post.content);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cancel;
pub mod session;
