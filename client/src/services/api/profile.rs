//! # Profile Endpoints
//!
//! Reads are scoped to any user id; writes always target the session user.
//! Successful writes do not touch the cached user in the session store.

use reqwest::Method;
use shared::{
    Ack, BioResponse, ProfilePictureResponse, UpdateBioRequest, UpdateProfilePictureRequest,
    UpdateUsernameRequest, UserId, UserProfile, UsernameResponse,
};

use super::client::ApiClient;
use crate::core::error::Result;
use crate::utils::validation::validate_required;

impl ApiClient {
    pub async fn get_username(&self, user_id: UserId) -> Result<String> {
        let request = self.request(Method::GET, &format!("/posts/{user_id}/username"));
        let response: UsernameResponse = self.execute(request, "Failed to get username").await?;
        Ok(response.username)
    }

    pub async fn get_bio(&self, user_id: UserId) -> Result<Option<String>> {
        let request = self.request(Method::GET, &format!("/posts/{user_id}/bio"));
        let response: BioResponse = self.execute(request, "Failed to get bio").await?;
        Ok(response.bio)
    }

    pub async fn get_profile_picture(&self, user_id: UserId) -> Result<Option<String>> {
        let request = self.request(Method::GET, &format!("/posts/{user_id}/pfp"));
        let response: ProfilePictureResponse = self
            .execute(request, "Failed to get profile picture")
            .await?;
        Ok(response.pfp)
    }

    /// Username, bio and picture fetched concurrently.
    ///
    /// The first failing read fails the whole profile; a partial profile is never
    /// returned.
    #[tracing::instrument(skip(self))]
    pub async fn get_user_profile(&self, user_id: UserId) -> Result<UserProfile> {
        let (username, bio, profile_picture) = tokio::try_join!(
            self.get_username(user_id),
            self.get_bio(user_id),
            self.get_profile_picture(user_id),
        )
        .inspect_err(|e| tracing::error!(error = %e, "Get user profile failed"))?;

        Ok(UserProfile {
            username,
            bio,
            profile_picture,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_username(&self, username: &str) -> Result<Ack> {
        let session = self.require_session()?;
        validate_required("Username", username).into_result()?;

        let request = self
            .request(Method::PUT, &format!("/posts/{}/username", session.user.id))
            .json(&UpdateUsernameRequest {
                username: username.trim().to_string(),
            });
        self.execute(request, "Failed to update username").await
    }

    /// Replace the session user's bio. An empty bio clears it.
    #[tracing::instrument(skip(self, bio))]
    pub async fn update_bio(&self, bio: &str) -> Result<Ack> {
        let session = self.require_session()?;

        let request = self
            .request(Method::PUT, &format!("/posts/{}/bio", session.user.id))
            .json(&UpdateBioRequest {
                bio: bio.to_string(),
            });
        self.execute(request, "Failed to update bio").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_profile_picture(&self, image_url: &str) -> Result<Ack> {
        let session = self.require_session()?;
        validate_required("Image URL", image_url).into_result()?;

        let request = self
            .request(Method::PUT, &format!("/posts/{}/pfp", session.user.id))
            .json(&UpdateProfilePictureRequest {
                image_url: image_url.trim().to_string(),
            });
        self.execute(request, "Failed to update profile picture").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_profile_picture(&self) -> Result<Ack> {
        let session = self.require_session()?;

        let request = self.request(Method::DELETE, &format!("/posts/{}/pfp", session.user.id));
        self.execute(request, "Failed to delete profile picture").await
    }
}
