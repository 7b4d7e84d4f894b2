//! # Utility Functions
//!
//! Shared utility functions used across the blog client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Input validation for signup, posts, comments and profile fields
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate display helpers (excerpts)
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
