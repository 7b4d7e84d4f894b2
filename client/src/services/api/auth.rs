//! # Authentication Endpoints
//!
//! Login, registration and the client-side session lifecycle.
//!
//! Session states: **Anonymous** → **Authenticated** only through a successful
//! [`login`](ApiClient::login); back through [`logout`](ApiClient::logout) or when the
//! server rejects the token (see [`ApiError::SessionExpired`](crate::core::error::ApiError::SessionExpired)).

use reqwest::Method;
use shared::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse, User};

use super::client::ApiClient;
use crate::core::error::Result;
use crate::services::session::Session;
use crate::utils::validation::{validate_email, validate_password_confirmation, validate_required};

impl ApiClient {
    /// Login with email and password; persists the session on success.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        tracing::info!("Attempting login");

        let request = self
            .anonymous_request(Method::POST, "/auth/login")
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            });

        let response: AuthResponse = self.execute(request, "Login failed").await?;
        let session = Session {
            token: response.token,
            user: response.user,
        };
        self.store().set(&session)?;

        tracing::info!(user_id = session.user.id, "Login successful");
        Ok(session)
    }

    /// Create an account. Does not log in.
    #[tracing::instrument(skip(self, password))]
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User> {
        let request = self
            .anonymous_request(Method::POST, "/auth/register")
            .json(&RegisterRequest {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            });

        let response: RegisterResponse = self.execute(request, "Registration failed").await?;
        let user = response.into_user();

        tracing::info!(user_id = user.id, "Registration successful");
        Ok(user)
    }

    /// Signup-form flow: validates the inputs and the password confirmation locally
    /// before calling [`register`](Self::register).
    pub async fn register_confirmed(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<User> {
        validate_required("Name", name).into_result()?;
        validate_email(email.trim()).into_result()?;
        validate_password_confirmation(password, confirm_password).into_result()?;

        self.register(name.trim(), email.trim(), password).await
    }

    /// Forget the stored session. Never touches the network.
    pub fn logout(&self) -> Result<()> {
        self.store().clear()?;
        tracing::info!("Logged out");
        Ok(())
    }

    pub fn session(&self) -> Result<Option<Session>> {
        Ok(self.store().get()?)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_session().is_some()
    }

    /// Cached user of the current session.
    pub fn current_user(&self) -> Option<User> {
        self.current_session().map(|session| session.user)
    }

    fn current_session(&self) -> Option<Session> {
        self.store().get().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Session store unreadable, treating as anonymous");
            None
        })
    }
}
