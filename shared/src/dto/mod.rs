//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the blog backend
//! through its REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, user record, error body
//! - [`posts`] - Posts, likes and their list envelopes
//! - [`comments`] - Comments and their list envelope
//! - [`profile`] - Per-field profile reads/writes and the aggregate profile
//! - [`common`] - Untyped acknowledgements
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase on the wire; snake_case spellings are accepted as aliases
//! - **Optional fields**: Omitted when `None` unless the backend expects an explicit `null`
//! - **List envelopes**: Missing collections decode as empty
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/v1/auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "ada@example.com",
//!   "password": "hunter2"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": { "id": 1, "name": "ada", "email": "ada@example.com" }
//! }
//! ```

pub mod auth;
pub mod comments;
pub mod common;
pub mod posts;
pub mod profile;

pub use auth::*;
pub use comments::*;
pub use common::*;
pub use posts::*;
pub use profile::*;
