//! Profile endpoints.

use blogkit_core::{Profile, ProfileInput, Result};
use blogkit_http::AuthClient;

/// Profile operations.
#[derive(Debug, Clone)]
pub struct Profiles {
    client: AuthClient,
}

impl Profiles {
    pub fn new(client: &AuthClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// A public profile by username.
    pub async fn by_username(&self, username: &str) -> Result<Profile> {
        self.client.get(&format!("/profile/{username}"), None).await
    }

    /// Edit the requesting user's profile.
    pub async fn edit(&self, username: &str, input: &ProfileInput) -> Result<Profile> {
        self.client
            .put(
                &format!("/profile/{username}/edit"),
                Some(serde_json::to_value(input)?),
            )
            .await
    }
}
