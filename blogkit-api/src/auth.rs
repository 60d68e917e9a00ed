//! Account endpoints: registration, login, session management.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use blogkit_core::{Credentials, Result, UserSummary};
use blogkit_http::{AuthClient, Method, TokenStoreExt};

/// Registration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Password-reset payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordInput {
    pub token: String,
    pub password: String,
}

/// Account and session operations.
///
/// `login` stores the returned credential pair in the client's token
/// store, so every subsequent request on the same client (or any clone)
/// is authenticated.
#[derive(Debug, Clone)]
pub struct Auth {
    client: AuthClient,
}

impl Auth {
    pub fn new(client: &AuthClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Create an account.
    pub async fn register(&self, input: &RegisterInput) -> Result<UserSummary> {
        self.client
            .post("/auth/register", Some(serde_json::to_value(input)?))
            .await
    }

    /// Exchange email/password for a credential pair and store it.
    pub async fn login(&self, input: &LoginInput) -> Result<Credentials> {
        let credentials: Credentials = self
            .client
            .post("/auth/login", Some(serde_json::to_value(input)?))
            .await?;
        self.client.token_store().store_credentials(&credentials);
        debug!("stored credentials after login");
        Ok(credentials)
    }

    /// Drop the stored credential pair. Purely local.
    pub fn logout(&self) {
        self.client.token_store().clear_credentials();
        debug!("cleared stored credentials");
    }

    /// The currently authenticated user.
    pub async fn current_user(&self) -> Result<UserSummary> {
        self.client.get("/auth/me", None).await
    }

    /// Request a password-reset email.
    pub async fn forgot_password(&self, email: &str) -> Result<()> {
        self.client
            .send_unit(Method::POST, "/auth/forgot", Some(json!({ "email": email })))
            .await
    }

    /// Set a new password using a reset token.
    pub async fn reset_password(&self, input: &ResetPasswordInput) -> Result<()> {
        self.client
            .send_unit(Method::POST, "/auth/reset", Some(serde_json::to_value(input)?))
            .await
    }

    /// Confirm an email address from a verification link.
    pub async fn verify_email(&self, token: &str) -> Result<()> {
        let path = format!("/auth/verify-email?token={token}");
        self.client.send_unit(Method::POST, &path, None).await
    }

    /// Check whether a verification token is still valid. A definitive
    /// rejection maps to `Ok(false)`; transport failures stay errors.
    pub async fn verify_token(&self, token: &str) -> Result<bool> {
        let result: Result<serde_json::Value> = self
            .client
            .get("/auth/verify-token", Some(json!({ "token": token })))
            .await;
        match result {
            Ok(_) => Ok(true),
            Err(err) if err.status().is_some() => Ok(false),
            Err(err) => Err(err),
        }
    }
}
