//! # Common Error Types
//!
//! Consolidated error handling for the blog client.
//!
//! Every API operation returns [`Result<T>`], so callers must handle failure
//! explicitly instead of relying on something upstream to catch it.
//!
//! ## Error Categories
//!
//! - **Network**: the request could not be sent or the response could not be read
//! - **Server**: non-2xx response, carries the server-supplied (or fallback) message
//! - **AuthRequired**: an identity operation was attempted without a session
//! - **Validation**: client-side input rejection, raised before any request
//! - **SessionExpired**: the server rejected the stored token; the session was cleared
//! - **Cancelled**: the caller aborted the call through its [`CancelToken`]
//! - **Decode**: a 2xx body did not have the expected shape
//! - **Storage**: the session store failed
//!
//! ## Usage Pattern
//!
//! ```rust
//! use blog_client::core::error::ApiError;
//!
//! fn describe(err: &ApiError) -> &'static str {
//!     match err {
//!         ApiError::AuthRequired | ApiError::SessionExpired => "please log in",
//!         ApiError::Cancelled => "cancelled",
//!         _ => "something went wrong",
//!     }
//! }
//! ```
//!
//! [`CancelToken`]: crate::services::cancel::CancelToken

use thiserror::Error;

use crate::services::session::SessionStoreError;

/// Error type shared by every client operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout, or a broken response stream.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response.
    ///
    /// Displays as the bare message so it can be shown to the user as-is
    /// (e.g. "Invalid credentials").
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Operation needs a session and none is stored. No request was issued.
    #[error("User not authenticated")]
    AuthRequired,

    /// Input rejected on the client. No request was issued.
    ///
    /// ```rust
    /// use blog_client::core::error::ApiError;
    ///
    /// let err = ApiError::Validation("Passwords do not match".to_string());
    /// assert_eq!(err.to_string(), "Validation error: Passwords do not match");
    /// ```
    #[error("Validation error: {0}")]
    Validation(String),

    /// The server answered 401 to a request carrying a bearer token.
    /// The stored session has already been cleared when this is returned.
    #[error("Session expired, please log in again")]
    SessionExpired,

    #[error("Request cancelled")]
    Cancelled,

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Session storage error: {0}")]
    Storage(#[from] SessionStoreError),
}

impl ApiError {
    /// HTTP status for server errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the caller should send the user back to the login flow.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::AuthRequired | Self::SessionExpired)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
