use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::auth::UserId;
use super::posts::PostId;

/// Backend identifier for comments.
pub type CommentId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    #[serde(alias = "post_id")]
    pub post_id: PostId,
    #[serde(alias = "author_id")]
    pub author_id: UserId,
    pub content: String,
    #[serde(alias = "created_at")]
    pub created_at: DateTime<Utc>,
}

/// `GET /posts/{postId}/comments` envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentsResponse {
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Body for adding or editing a comment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentRequest {
    pub content: String,
}

/// Created comment, bare or wrapped in `{ "comment": ... }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AddCommentResponse {
    Wrapped { comment: Comment },
    Bare(Comment),
}

impl AddCommentResponse {
    pub fn into_comment(self) -> Comment {
        match self {
            Self::Wrapped { comment } | Self::Bare(comment) => comment,
        }
    }
}
