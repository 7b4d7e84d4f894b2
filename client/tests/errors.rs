//! # Error Path Tests
//!
//! Missing sessions, rejected tokens, cancellation and unreachable backends.

mod common;

use std::time::Duration;

use blog_client::config::ClientConfig;
use blog_client::{ApiClient, ApiError, BlogApi, CancelToken, Session, SessionStore};
use common::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_identity_operations_require_session() {
    // Arrange
    let (server, client, _store) = anonymous().await;
    let api: &dyn BlogApi = &client;

    // Act
    let results = vec![
        api.create_post("hello", None).await.map(drop),
        api.delete_post(1).await.map(drop),
        api.add_comment(1, "hi").await.map(drop),
        api.like(1).await.map(drop),
        api.unlike(1).await.map(drop),
        api.toggle_like(1).await.map(drop),
        api.update_username("ada").await.map(drop),
        api.update_bio("bio").await.map(drop),
        api.update_profile_picture("https://img/a.png").await.map(drop),
        api.delete_profile_picture().await.map(drop),
    ];

    // Assert
    for result in results {
        assert!(matches!(result, Err(ApiError::AuthRequired)), "got {result:?}");
    }
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_session_check_precedes_validation() {
    let (_server, client, _store) = anonymous().await;

    let err = client.create_post("", None).await.unwrap_err();
    assert!(matches!(err, ApiError::AuthRequired));
}

#[tokio::test]
async fn test_rejected_token_clears_session() {
    // Arrange
    let (server, client, store) = logged_in().await;
    Mock::given(method("GET"))
        .and(path(api_path("/posts")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid token" })))
        .mount(&server)
        .await;

    // Act
    let err = client.list_posts().await.unwrap_err();

    // Assert
    assert!(matches!(err, ApiError::SessionExpired));
    assert!(err.requires_login());
    assert_eq!(store.get().unwrap(), None);
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_late_rejection_of_old_token_keeps_new_session() {
    // Arrange
    let (server, client, store) = logged_in().await;
    Mock::given(method("GET"))
        .and(path(api_path("/posts")))
        .and(header("authorization", "Bearer t1"))
        .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let in_flight = tokio::spawn({
        let client = client.clone();
        async move { client.list_posts().await }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    // Act
    store
        .set(&Session {
            token: "fresh".to_string(),
            user: user(1),
        })
        .unwrap();
    let err = in_flight.await.unwrap().unwrap_err();

    // Assert
    assert!(matches!(err, ApiError::SessionExpired));
    assert_eq!(store.get().unwrap().map(|s| s.token).as_deref(), Some("fresh"));
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_anonymous_unauthorized_is_plain_server_error() {
    let (server, client, _store) = anonymous().await;
    Mock::given(method("GET"))
        .and(path(api_path("/posts")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Login required" })))
        .mount(&server)
        .await;

    let err = client.list_posts().await.unwrap_err();

    assert_eq!(err.to_string(), "Login required");
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_pre_cancelled_token_sends_nothing() {
    let (server, client, _store) = logged_in().await;
    let token = CancelToken::new();
    token.cancel();

    let err = client.with_cancel(token).list_posts().await.unwrap_err();

    assert!(matches!(err, ApiError::Cancelled));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_cancel_in_flight_request() {
    // Arrange
    let (server, client, _store) = logged_in().await;
    Mock::given(method("GET"))
        .and(path(api_path("/posts")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "posts": [] }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let token = CancelToken::new();
    let cancellable = client.with_cancel(token.clone());
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    // Act
    let err = tokio::time::timeout(Duration::from_secs(2), cancellable.list_posts())
        .await
        .expect("cancellation should resolve the call promptly")
        .unwrap_err();

    // Assert
    assert!(matches!(err, ApiError::Cancelled));
    // the session is untouched and the original handle still works
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = ApiClient::with_memory_store(format!("http://127.0.0.1:{port}{PREFIX}"));
    let err = client.list_posts().await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_slow_backend_times_out_as_network_error() {
    let (server, _, _) = anonymous().await;
    Mock::given(method("GET"))
        .and(path(api_path("/posts")))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let config = ClientConfig {
        timeout: Duration::from_secs(1),
        ..ClientConfig::with_base_url(format!("{}{}", server.uri(), PREFIX))
    };
    let client = ApiClient::new(&config, std::sync::Arc::new(blog_client::MemorySessionStore::new()));

    let err = client.list_posts().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
