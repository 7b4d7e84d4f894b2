//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Client error type (`ApiError`, `Result<T>`)
//! - **[`service`]**: Service trait for dependency injection (`BlogApi`)
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use blog_client::core::service::BlogApi;
//! use blog_client::services::api::ApiClient;
//!
//! let api: Arc<dyn BlogApi> = Arc::new(ApiClient::with_memory_store("http://localhost:3000/api/v1"));
//! ```

pub mod error;
pub mod service;

// Re-export commonly used types for convenience
pub use error::{ApiError, Result};
pub use service::BlogApi;
