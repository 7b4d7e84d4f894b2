//! # Post and Like DTOs
//!
//! Posts are server-owned; the client references them by id. A [`Like`] carries no
//! state of its own: its existence means the user liked the post.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::auth::UserId;

/// Backend identifier for posts.
pub type PostId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    #[serde(alias = "author_id")]
    pub author_id: UserId,
    pub content: String,
    #[serde(default, alias = "image_url", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, alias = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// `GET /posts` and `GET /posts/search` envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostsResponse {
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// `POST /posts/new/{userId}` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub content: String,
    pub image_url: Option<String>,
}

/// Created post, bare or wrapped in `{ "post": ... }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CreatePostResponse {
    Wrapped { post: Post },
    Bare(Post),
}

impl CreatePostResponse {
    pub fn into_post(self) -> Post {
        match self {
            Self::Wrapped { post } | Self::Bare(post) => post,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    #[serde(alias = "post_id")]
    pub post_id: PostId,
    #[serde(alias = "user_id")]
    pub user_id: UserId,
}

/// `GET /posts/likes/{postId}` envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LikesResponse {
    #[serde(default)]
    pub likes: Vec<Like>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_wire_names() {
        let post: Post = serde_json::from_str(
            r#"{"id":3,"author_id":1,"content":"hi","image_url":null,"created_at":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(post.author_id, 1);
        assert_eq!(post.image_url, None);
        assert!(post.created_at.is_some());
    }

    #[test]
    fn test_create_post_request_keeps_null_image() {
        let body = serde_json::to_value(CreatePostRequest {
            content: "hello".to_string(),
            image_url: None,
        })
        .unwrap();

        assert_eq!(body, serde_json::json!({"content": "hello", "imageUrl": null}));
    }

    #[test]
    fn test_like_accepts_both_spellings() {
        let snake: Like = serde_json::from_str(r#"{"post_id":4,"user_id":9}"#).unwrap();
        let camel: Like = serde_json::from_str(r#"{"postId":4,"userId":9}"#).unwrap();
        assert_eq!(snake, camel);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let posts: PostsResponse = serde_json::from_str("{}").unwrap();
        let likes: LikesResponse = serde_json::from_str(r#"{"likes":[]}"#).unwrap();
        assert!(posts.posts.is_empty());
        assert!(likes.likes.is_empty());
    }
}
