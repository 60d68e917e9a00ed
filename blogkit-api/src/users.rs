//! User lookup endpoints.

use blogkit_core::{Result, UserSummary};
use blogkit_http::AuthClient;

/// User lookups.
#[derive(Debug, Clone)]
pub struct Users {
    client: AuthClient,
}

impl Users {
    pub fn new(client: &AuthClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// A user by username.
    pub async fn by_username(&self, username: &str) -> Result<UserSummary> {
        self.client.get(&format!("/users/{username}"), None).await
    }
}
