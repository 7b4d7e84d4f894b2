//! # Comment Endpoints

use reqwest::Method;
use shared::{Ack, AddCommentResponse, Comment, CommentId, CommentRequest, CommentsResponse, PostId};

use super::client::ApiClient;
use crate::core::error::Result;
use crate::utils::validation::validate_required;

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>> {
        let request = self.request(Method::GET, &format!("/posts/{post_id}/comments"));
        let response: CommentsResponse = self.execute(request, "Failed to get comments").await?;
        Ok(response.comments)
    }

    /// Comment on `post_id` as the session user.
    #[tracing::instrument(skip(self, content))]
    pub async fn add_comment(&self, post_id: PostId, content: &str) -> Result<Comment> {
        self.require_session()?;
        validate_required("Comment", content).into_result()?;

        let request = self
            .request(Method::POST, &format!("/posts/{post_id}/comments"))
            .json(&CommentRequest {
                content: content.trim().to_string(),
            });
        let response: AddCommentResponse = self.execute(request, "Failed to add comment").await?;
        let comment = response.into_comment();

        tracing::info!(comment_id = comment.id, "Comment added");
        Ok(comment)
    }

    #[tracing::instrument(skip(self, content))]
    pub async fn update_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
        content: &str,
    ) -> Result<Ack> {
        validate_required("Comment", content).into_result()?;

        let request = self
            .request(Method::PUT, &format!("/posts/{post_id}/comments/{comment_id}"))
            .json(&CommentRequest {
                content: content.trim().to_string(),
            });
        self.execute(request, "Failed to update comment").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_comment(&self, post_id: PostId, comment_id: CommentId) -> Result<Ack> {
        let request = self.request(
            Method::DELETE,
            &format!("/posts/{post_id}/del-comments/{comment_id}"),
        );
        self.execute(request, "Failed to delete comment").await
    }
}
