//! # Like Endpoints
//!
//! The backend does not promise idempotent likes, so [`like`](ApiClient::like) and
//! [`unlike`](ApiClient::unlike) read the current like list first and only write when
//! the state actually changes. Repeated calls settle to the same state.

use reqwest::Method;
use shared::{Ack, Like, LikesResponse, PostId, UserId};

use super::client::ApiClient;
use crate::core::error::Result;

fn liked_by(likes: &[Like], user_id: UserId) -> bool {
    likes.iter().any(|like| like.user_id == user_id)
}

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn get_likes(&self, post_id: PostId) -> Result<Vec<Like>> {
        let request = self.request(Method::GET, &format!("/posts/likes/{post_id}"));
        let response: LikesResponse = self.execute(request, "Failed to get likes").await?;
        Ok(response.likes)
    }

    /// Like `post_id` as the session user. No-op if already liked.
    #[tracing::instrument(skip(self))]
    pub async fn like(&self, post_id: PostId) -> Result<Ack> {
        let session = self.require_session()?;

        if liked_by(&self.get_likes(post_id).await?, session.user.id) {
            tracing::debug!("Post already liked");
            return Ok(Ack::default());
        }
        self.post_like(post_id).await
    }

    /// Remove the session user's like from `post_id`. No-op if not liked.
    #[tracing::instrument(skip(self))]
    pub async fn unlike(&self, post_id: PostId) -> Result<Ack> {
        let session = self.require_session()?;

        if !liked_by(&self.get_likes(post_id).await?, session.user.id) {
            tracing::debug!("Post not liked, nothing to remove");
            return Ok(Ack::default());
        }
        self.delete_like(post_id).await
    }

    /// Whether the session user likes `post_id`; always false when anonymous.
    pub async fn is_liked(&self, post_id: PostId) -> Result<bool> {
        let Some(user) = self.current_user() else {
            return Ok(false);
        };
        Ok(liked_by(&self.get_likes(post_id).await?, user.id))
    }

    /// Flip the like state of `post_id` and return the new state.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_like(&self, post_id: PostId) -> Result<bool> {
        let session = self.require_session()?;

        if liked_by(&self.get_likes(post_id).await?, session.user.id) {
            self.delete_like(post_id).await?;
            Ok(false)
        } else {
            self.post_like(post_id).await?;
            Ok(true)
        }
    }

    async fn post_like(&self, post_id: PostId) -> Result<Ack> {
        let request = self.request(Method::POST, &format!("/posts/likes/{post_id}"));
        let ack = self.execute(request, "Failed to like post").await?;
        tracing::info!(post_id, "Post liked");
        Ok(ack)
    }

    async fn delete_like(&self, post_id: PostId) -> Result<Ack> {
        let request = self.request(Method::DELETE, &format!("/posts/likes/{post_id}"));
        let ack = self.execute(request, "Failed to unlike post").await?;
        tracing::info!(post_id, "Post unliked");
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liked_by() {
        let likes = [
            Like { post_id: 1, user_id: 2 },
            Like { post_id: 1, user_id: 3 },
        ];
        assert!(liked_by(&likes, 3));
        assert!(!liked_by(&likes, 4));
        assert!(!liked_by(&[], 2));
    }
}
