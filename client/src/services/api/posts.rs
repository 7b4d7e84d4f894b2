//! # Post Endpoints
//!
//! Listing, creating, deleting and searching posts.

use reqwest::Method;
use shared::{Ack, CreatePostRequest, CreatePostResponse, Post, PostId, PostsResponse};

use super::client::ApiClient;
use crate::core::error::Result;
use crate::utils::validation::validate_required;

impl ApiClient {
    /// All posts visible to the caller.
    #[tracing::instrument(skip(self))]
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let request = self.request(Method::GET, "/posts");
        let response: PostsResponse = self.execute(request, "Failed to fetch posts").await?;

        tracing::debug!(count = response.posts.len(), "Fetched posts");
        Ok(response.posts)
    }

    /// Publish a post as the session user.
    ///
    /// A blank `image_url` is sent as `null`.
    #[tracing::instrument(skip(self, content))]
    pub async fn create_post(&self, content: &str, image_url: Option<&str>) -> Result<Post> {
        let session = self.require_session()?;
        validate_required("Post content", content).into_result()?;

        let body = CreatePostRequest {
            content: content.trim().to_string(),
            image_url: image_url
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string),
        };

        let request = self
            .request(Method::POST, &format!("/posts/new/{}", session.user.id))
            .json(&body);
        let response: CreatePostResponse = self.execute(request, "Failed to create post").await?;
        let post = response.into_post();

        tracing::info!(post_id = post.id, "Post created");
        Ok(post)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_post(&self, post_id: PostId) -> Result<Ack> {
        let session = self.require_session()?;

        let request = self.request(
            Method::DELETE,
            &format!("/posts/{}/{}", post_id, session.user.id),
        );
        let ack = self.execute(request, "Failed to delete post").await?;

        tracing::info!("Post deleted");
        Ok(ack)
    }

    /// Full-text search over posts.
    ///
    /// A blank query (empty or whitespace only) returns an empty list without
    /// contacting the backend; other queries are URL-escaped and sent as given.
    #[tracing::instrument(skip(self))]
    pub async fn search_posts(&self, query: &str) -> Result<Vec<Post>> {
        if query.trim().is_empty() {
            tracing::debug!("Blank search query, skipping request");
            return Ok(Vec::new());
        }

        let request = self
            .request(Method::GET, "/posts/search")
            .query(&[("q", query)]);
        let response: PostsResponse = self.execute(request, "Failed to search posts").await?;

        tracing::debug!(count = response.posts.len(), "Search complete");
        Ok(response.posts)
    }
}
