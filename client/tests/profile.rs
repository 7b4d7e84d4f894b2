//! # Profile Tests

mod common;

use blog_client::ApiError;
use common::*;
use serde_json::json;
use shared::UserProfile;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_read(server: &MockServer, field: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(api_path(&format!("/posts/3/{field}"))))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_user_profile_combines_reads() {
    let (server, client, _store) = anonymous().await;
    mount_read(&server, "username", 200, json!({ "username": "grace" })).await;
    mount_read(&server, "bio", 200, json!({ "bio": "compilers" })).await;
    mount_read(&server, "pfp", 200, json!({ "pfp": null })).await;

    let profile = client.get_user_profile(3).await.unwrap();

    assert_eq!(
        profile,
        UserProfile {
            username: "grace".to_string(),
            bio: Some("compilers".to_string()),
            profile_picture: None,
        }
    );
    assert_eq!(request_count(&server).await, 3);
}

#[tokio::test]
async fn test_get_user_profile_fails_as_a_whole() {
    let (server, client, _store) = anonymous().await;
    mount_read(&server, "username", 200, json!({ "username": "grace" })).await;
    mount_read(&server, "bio", 500, json!({})).await;
    mount_read(&server, "pfp", 200, json!({ "pfp": "https://img/g.png" })).await;

    let err = client.get_user_profile(3).await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to get bio");
    assert!(matches!(err, ApiError::Server { status: 500, .. }));
}

#[tokio::test]
async fn test_update_username_targets_session_user() {
    let (server, client, _store) = logged_in().await;
    Mock::given(method("PUT"))
        .and(path(api_path("/posts/1/username")))
        .and(body_json(json!({ "username": "ada2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Username updated" })))
        .expect(1)
        .mount(&server)
        .await;

    let ack = client.update_username(" ada2 ").await.unwrap();

    assert_eq!(ack.message(), Some("Username updated"));
    // cached user is left alone
    assert_eq!(client.current_user().map(|u| u.name), Some("ada".to_string()));
}

#[tokio::test]
async fn test_update_bio_allows_empty() {
    let (server, client, _store) = logged_in().await;
    Mock::given(method("PUT"))
        .and(path(api_path("/posts/1/bio")))
        .and(body_json(json!({ "bio": "" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Bio updated" })))
        .expect(1)
        .mount(&server)
        .await;

    client.update_bio("").await.unwrap();
}

#[tokio::test]
async fn test_update_profile_picture_sends_image_url() {
    let (server, client, _store) = logged_in().await;
    Mock::given(method("PUT"))
        .and(path(api_path("/posts/1/pfp")))
        .and(body_json(json!({ "imageUrl": "https://img/a.png" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Profile picture updated" })))
        .expect(1)
        .mount(&server)
        .await;

    client.update_profile_picture("https://img/a.png").await.unwrap();
}

#[tokio::test]
async fn test_update_username_blank_is_rejected_locally() {
    let (server, client, _store) = logged_in().await;

    let err = client.update_username("").await.unwrap_err();

    assert!(matches!(err, ApiError::Validation(ref m) if m == "Username is required"));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_delete_profile_picture() {
    let (server, client, _store) = logged_in().await;
    Mock::given(method("DELETE"))
        .and(path(api_path("/posts/1/pfp")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let ack = client.delete_profile_picture().await.unwrap();
    assert_eq!(ack.message(), None);
}
