//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! Every endpoint goes through the same protocol:
//!
//! 1. Build the request with `Content-Type: application/json` and, when a session is
//!    stored, `Authorization: Bearer <token>`
//! 2. Read the body regardless of status
//! 3. Non-2xx → [`ApiError::Server`] with the server `error` field or the per-operation
//!    fallback; 401 on a bearer request → [`ApiError::SessionExpired`], clearing the
//!    session if it still holds the rejected token
//! 4. 2xx → decode the expected payload (an empty body decodes as `null`)

use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Request, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared::ErrorResponse;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::core::error::{ApiError, Result};
use crate::services::cancel::CancelToken;
use crate::services::session::{MemorySessionStore, Session, SessionStore};

/// HTTP client for the blog backend.
///
/// Cheap to clone: clones share the connection pool and the session store.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    cancel: Option<CancelToken>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("cancellable", &self.cancel.is_some())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for `config` backed by `store`.
    pub fn new(config: &ClientConfig, store: Arc<dyn SessionStore>) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
            cancel: None,
        }
    }

    /// Client with an in-memory session store and default settings.
    pub fn with_memory_store(base_url: impl Into<String>) -> Self {
        Self::new(
            &ClientConfig::with_base_url(base_url),
            Arc::new(MemorySessionStore::new()),
        )
    }

    /// Handle whose calls abort with [`ApiError::Cancelled`] once `token` fires.
    pub fn with_cancel(&self, token: CancelToken) -> Self {
        Self {
            cancel: Some(token),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    /// The stored session, or [`ApiError::AuthRequired`] without touching the network.
    pub(crate) fn require_session(&self) -> Result<Session> {
        self.store.get()?.ok_or_else(|| {
            tracing::warn!("Operation requires an authenticated session");
            ApiError::AuthRequired
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request without credentials (login, register).
    pub(crate) fn anonymous_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json")
    }

    /// Request carrying the stored bearer token, if there is one.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.anonymous_request(method, path);

        match self.store.get() {
            Ok(Some(session)) => builder.bearer_auth(session.token),
            Ok(None) => builder,
            Err(e) => {
                tracing::warn!(error = %e, "Session store unreadable, sending request without token");
                builder
            }
        }
    }

    /// Send `builder` and decode a 2xx body as `T`.
    ///
    /// `fallback` is the error message used when a failed response carries no
    /// `error` field.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        fallback: &'static str,
    ) -> Result<T> {
        let request = builder.build()?;
        let sent_token = bearer_token(&request);

        let span = tracing::debug_span!(
            "api_request",
            request_id = %Uuid::new_v4(),
            method = %request.method(),
            path = %request.url().path(),
        );

        let round_trip = async move {
            let start = Instant::now();

            let response = self.client.execute(request).await.map_err(|e| {
                tracing::error!(error = %e, "Network error");
                ApiError::Network(e.to_string())
            })?;

            let status = response.status();
            let body = response.bytes().await.map_err(|e| {
                tracing::error!(error = %e, "Failed to read response body");
                ApiError::Network(e.to_string())
            })?;

            tracing::debug!(
                status = status.as_u16(),
                duration_ms = start.elapsed().as_millis() as u64,
                "Response received"
            );

            if status.is_success() {
                decode(&body)
            } else {
                Err(self.failure(status, &body, sent_token.as_deref(), fallback))
            }
        }
        .instrument(span);

        let result = match &self.cancel {
            Some(token) => token.run(round_trip).await,
            None => round_trip.await,
        };

        if matches!(result, Err(ApiError::Cancelled)) {
            tracing::info!(operation = fallback, "Request cancelled");
        }
        result
    }

    fn failure(
        &self,
        status: StatusCode,
        body: &[u8],
        sent_token: Option<&str>,
        fallback: &str,
    ) -> ApiError {
        if let (StatusCode::UNAUTHORIZED, Some(token)) = (status, sent_token) {
            self.expire_session(token);
            return ApiError::SessionExpired;
        }

        let message = serde_json::from_slice::<ErrorResponse>(body)
            .ok()
            .and_then(|e| e.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());

        tracing::warn!(status = status.as_u16(), error = %message, "Request failed");
        ApiError::Server {
            status: status.as_u16(),
            message,
        }
    }

    /// Clear the store only if it still holds `rejected`; a session set after the
    /// request went out belongs to a newer login.
    fn expire_session(&self, rejected: &str) {
        match self.store.get() {
            Ok(Some(session)) if session.token == rejected => match self.store.clear() {
                Ok(()) => tracing::warn!("Token rejected by server, session cleared"),
                Err(e) => tracing::error!(error = %e, "Failed to clear rejected session"),
            },
            Ok(_) => tracing::warn!("Stale token rejected by server, current session kept"),
            Err(e) => tracing::error!(error = %e, "Session store unreadable after token rejection"),
        }
    }
}

/// Token carried in the request's `Authorization: Bearer` header, if any.
fn bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        body
    };

    serde_json::from_slice(body).map_err(|e| {
        tracing::error!(error = %e, "Response parse error");
        ApiError::Decode(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Ack;

    fn session() -> Session {
        Session {
            token: "t1".to_string(),
            user: shared::User {
                id: 1,
                name: "ada".to_string(),
                email: "ada@example.com".to_string(),
                bio: None,
                profile_picture: None,
            },
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::with_memory_store("http://localhost:3000/api/v1/");
        assert_eq!(client.base_url(), "http://localhost:3000/api/v1");
        assert_eq!(client.url("/posts"), "http://localhost:3000/api/v1/posts");
    }

    #[test]
    fn test_bearer_only_when_session_stored() {
        let anonymous = ApiClient::with_memory_store("http://localhost:3000/api/v1");
        let request = anonymous.request(Method::GET, "/posts").build().unwrap();
        assert!(!request.headers().contains_key(AUTHORIZATION));
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");

        let store = Arc::new(MemorySessionStore::with_session(session()));
        let authed = ApiClient::new(&ClientConfig::default(), store);
        let request = authed.request(Method::GET, "/posts").build().unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer t1");

        let login = authed.anonymous_request(Method::POST, "/auth/login").build().unwrap();
        assert!(!login.headers().contains_key(AUTHORIZATION));
    }

    #[test]
    fn test_require_session() {
        let client = ApiClient::with_memory_store("http://localhost:3000/api/v1");
        assert!(matches!(client.require_session(), Err(ApiError::AuthRequired)));
    }

    #[test]
    fn test_decode_empty_body_as_null() {
        let ack: Ack = decode(b"").unwrap();
        assert_eq!(ack, Ack::default());

        let err = decode::<Vec<i64>>(b"  ").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_failure_message_fallback() {
        let client = ApiClient::with_memory_store("http://localhost:3000/api/v1");

        let err = client.failure(StatusCode::BAD_REQUEST, br#"{"error":"Bad input"}"#, None, "Failed");
        assert_eq!(err.to_string(), "Bad input");

        let err = client.failure(StatusCode::INTERNAL_SERVER_ERROR, b"<html>", None, "Failed to fetch posts");
        assert_eq!(err.to_string(), "Failed to fetch posts");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_unauthorized_with_bearer_clears_session() {
        let store = Arc::new(MemorySessionStore::with_session(session()));
        let client = ApiClient::new(&ClientConfig::default(), store.clone());

        let err = client.failure(StatusCode::UNAUTHORIZED, b"{}", Some("t1"), "Failed");
        assert!(matches!(err, ApiError::SessionExpired));
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_unauthorized_for_stale_token_keeps_newer_session() {
        let store = Arc::new(MemorySessionStore::with_session(session()));
        let client = ApiClient::new(&ClientConfig::default(), store.clone());

        let err = client.failure(StatusCode::UNAUTHORIZED, b"{}", Some("old"), "Failed");

        assert!(matches!(err, ApiError::SessionExpired));
        assert_eq!(store.get().unwrap(), Some(session()));
    }

    #[test]
    fn test_bearer_token_read_from_request() {
        let store = Arc::new(MemorySessionStore::with_session(session()));
        let client = ApiClient::new(&ClientConfig::default(), store);

        let authed = client.request(Method::GET, "/posts").build().unwrap();
        assert_eq!(bearer_token(&authed).as_deref(), Some("t1"));

        let anonymous = client.anonymous_request(Method::POST, "/auth/login").build().unwrap();
        assert_eq!(bearer_token(&anonymous), None);
    }
}
