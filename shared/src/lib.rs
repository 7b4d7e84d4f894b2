//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the blog client and the blog backend.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, registration and the cached user record
//!   - **[`dto::posts`]**: Posts and likes
//!   - **[`dto::comments`]**: Comments
//!   - **[`dto::profile`]**: Username, bio and profile picture resources
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::excerpt`]**: Character-safe truncation with ellipsis
//!
//! ## Wire Format
//!
//! - Field names are **camelCase** in JSON (`authorId`, `imageUrl`, `profilePicture`)
//! - snake_case spellings are accepted on input for robustness against older backends
//! - Mutating endpoints without a typed payload decode into [`dto::common::Ack`]
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::auth::AuthResponse;
//!
//! let body = r#"{"token":"t1","user":{"id":1,"name":"ada","email":"ada@example.com"}}"#;
//! let response: AuthResponse = serde_json::from_str(body).unwrap();
//! assert_eq!(response.user.id, 1);
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
