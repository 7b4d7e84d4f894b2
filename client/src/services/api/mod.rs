//! # Backend API Client Module
//!
//! HTTP client for the blog REST backend.
//! Handles authentication, posts, likes, comments, profiles and search.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports and documentation
//! ├── client.rs    - ApiClient struct and the shared request/response protocol
//! ├── auth.rs      - Login, register, logout, session accessors
//! ├── posts.rs     - List, create, delete, search
//! ├── likes.rs     - Idempotent like/unlike, like list, toggle
//! ├── comments.rs  - List, add, edit, delete
//! └── profile.rs   - Username, bio, profile picture, aggregate profile
//! ```

pub mod auth;
pub mod client;
pub mod comments;
pub mod likes;
pub mod posts;
pub mod profile;

pub use client::ApiClient;
