//! # Service Traits
//!
//! Traits for dependency injection, so consumers (the CLI, UI layers, tests) can run
//! against a fake backend client.

use async_trait::async_trait;
use shared::{Ack, Comment, CommentId, Like, Post, PostId, User, UserId, UserProfile};

use crate::core::error::Result;
use crate::services::api::ApiClient;
use crate::services::session::Session;

/// Trait for blog API operations
#[async_trait]
pub trait BlogApi: Send + Sync {
    /// Login and persist the session
    async fn login(&self, email: &str, password: &str) -> Result<Session>;

    /// Register a new account after local validation of the signup form
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<User>;

    /// Clear the stored session
    fn logout(&self) -> Result<()>;

    /// User of the stored session, if any
    fn current_user(&self) -> Option<User>;

    async fn list_posts(&self) -> Result<Vec<Post>>;

    async fn create_post(&self, content: &str, image_url: Option<&str>) -> Result<Post>;

    async fn delete_post(&self, post_id: PostId) -> Result<Ack>;

    async fn search_posts(&self, query: &str) -> Result<Vec<Post>>;

    async fn like(&self, post_id: PostId) -> Result<Ack>;

    async fn unlike(&self, post_id: PostId) -> Result<Ack>;

    /// Flip the like state, returning the new state
    async fn toggle_like(&self, post_id: PostId) -> Result<bool>;

    async fn get_likes(&self, post_id: PostId) -> Result<Vec<Like>>;

    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>>;

    async fn add_comment(&self, post_id: PostId, content: &str) -> Result<Comment>;

    async fn update_comment(&self, post_id: PostId, comment_id: CommentId, content: &str)
        -> Result<Ack>;

    async fn delete_comment(&self, post_id: PostId, comment_id: CommentId) -> Result<Ack>;

    /// Username, bio and picture in one aggregate fetch
    async fn get_user_profile(&self, user_id: UserId) -> Result<UserProfile>;

    async fn update_username(&self, username: &str) -> Result<Ack>;

    async fn update_bio(&self, bio: &str) -> Result<Ack>;

    async fn update_profile_picture(&self, image_url: &str) -> Result<Ack>;

    async fn delete_profile_picture(&self) -> Result<Ack>;
}

// Implement BlogApi trait for ApiClient
#[async_trait]
impl BlogApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<Session> {
        ApiClient::login(self, email, password).await
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<User> {
        ApiClient::register_confirmed(self, name, email, password, confirm_password).await
    }

    fn logout(&self) -> Result<()> {
        ApiClient::logout(self)
    }

    fn current_user(&self) -> Option<User> {
        ApiClient::current_user(self)
    }

    async fn list_posts(&self) -> Result<Vec<Post>> {
        ApiClient::list_posts(self).await
    }

    async fn create_post(&self, content: &str, image_url: Option<&str>) -> Result<Post> {
        ApiClient::create_post(self, content, image_url).await
    }

    async fn delete_post(&self, post_id: PostId) -> Result<Ack> {
        ApiClient::delete_post(self, post_id).await
    }

    async fn search_posts(&self, query: &str) -> Result<Vec<Post>> {
        ApiClient::search_posts(self, query).await
    }

    async fn like(&self, post_id: PostId) -> Result<Ack> {
        ApiClient::like(self, post_id).await
    }

    async fn unlike(&self, post_id: PostId) -> Result<Ack> {
        ApiClient::unlike(self, post_id).await
    }

    async fn toggle_like(&self, post_id: PostId) -> Result<bool> {
        ApiClient::toggle_like(self, post_id).await
    }

    async fn get_likes(&self, post_id: PostId) -> Result<Vec<Like>> {
        ApiClient::get_likes(self, post_id).await
    }

    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>> {
        ApiClient::list_comments(self, post_id).await
    }

    async fn add_comment(&self, post_id: PostId, content: &str) -> Result<Comment> {
        ApiClient::add_comment(self, post_id, content).await
    }

    async fn update_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
        content: &str,
    ) -> Result<Ack> {
        ApiClient::update_comment(self, post_id, comment_id, content).await
    }

    async fn delete_comment(&self, post_id: PostId, comment_id: CommentId) -> Result<Ack> {
        ApiClient::delete_comment(self, post_id, comment_id).await
    }

    async fn get_user_profile(&self, user_id: UserId) -> Result<UserProfile> {
        ApiClient::get_user_profile(self, user_id).await
    }

    async fn update_username(&self, username: &str) -> Result<Ack> {
        ApiClient::update_username(self, username).await
    }

    async fn update_bio(&self, bio: &str) -> Result<Ack> {
        ApiClient::update_bio(self, bio).await
    }

    async fn update_profile_picture(&self, image_url: &str) -> Result<Ack> {
        ApiClient::update_profile_picture(self, image_url).await
    }

    async fn delete_profile_picture(&self) -> Result<Ack> {
        ApiClient::delete_profile_picture(self).await
    }
}
