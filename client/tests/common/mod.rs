//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use std::sync::Arc;

use blog_client::config::ClientConfig;
use blog_client::{ApiClient, MemorySessionStore, Session};
use serde_json::{json, Value};
use shared::User;
use wiremock::MockServer;

pub const PREFIX: &str = "/api/v1";
pub const TOKEN: &str = "t1";

/// Full request path under the versioned prefix.
pub fn api_path(path: &str) -> String {
    format!("{PREFIX}{path}")
}

pub fn user(id: i64) -> User {
    User {
        id,
        name: "ada".to_string(),
        email: "a@b.com".to_string(),
        bio: None,
        profile_picture: None,
    }
}

pub fn user_json(id: i64) -> Value {
    json!({ "id": id, "name": "ada", "email": "a@b.com" })
}

pub fn post_json(id: i64, author_id: i64, content: &str) -> Value {
    json!({ "id": id, "authorId": author_id, "content": content, "imageUrl": null })
}

fn client_for(server: &MockServer, store: Arc<MemorySessionStore>) -> ApiClient {
    let config = ClientConfig::with_base_url(format!("{}{}", server.uri(), PREFIX));
    ApiClient::new(&config, store)
}

/// Backend plus a client with no stored session.
pub async fn anonymous() -> (MockServer, ApiClient, Arc<MemorySessionStore>) {
    let server = MockServer::start().await;
    let store = Arc::new(MemorySessionStore::new());
    let client = client_for(&server, store.clone());
    (server, client, store)
}

/// Backend plus a client already holding a session for user 1 with token `t1`.
pub async fn logged_in() -> (MockServer, ApiClient, Arc<MemorySessionStore>) {
    let server = MockServer::start().await;
    let store = Arc::new(MemorySessionStore::with_session(Session {
        token: TOKEN.to_string(),
        user: user(1),
    }));
    let client = client_for(&server, store.clone());
    (server, client, store)
}

/// Number of requests the backend has seen so far.
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or_default()
}
