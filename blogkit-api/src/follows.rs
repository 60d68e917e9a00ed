//! Follow endpoints.

use serde::Deserialize;
use serde_json::json;

use blogkit_core::{FollowStats, Result, UserSummary};
use blogkit_http::{AuthClient, Method};

#[derive(Debug, Deserialize)]
struct FollowCheck {
    #[serde(default)]
    is_following: bool,
}

/// Follow/unfollow operations and follower listings.
#[derive(Debug, Clone)]
pub struct Follows {
    client: AuthClient,
}

impl Follows {
    pub fn new(client: &AuthClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Follow a user.
    pub async fn follow(&self, user_id: u64) -> Result<()> {
        self.client
            .send_unit(
                Method::POST,
                "/follows/follow",
                Some(json!({ "followedId": user_id })),
            )
            .await
    }

    /// Unfollow a user.
    pub async fn unfollow(&self, user_id: u64) -> Result<()> {
        self.client
            .send_unit(
                Method::POST,
                "/follows/unfollow",
                Some(json!({ "followedId": user_id })),
            )
            .await
    }

    /// Whether the requesting user follows `user_id`.
    pub async fn check(&self, user_id: u64) -> Result<bool> {
        let check: FollowCheck = self
            .client
            .get(&format!("/follows/check/{user_id}"), None)
            .await?;
        Ok(check.is_following)
    }

    /// Users following `user_id`.
    pub async fn followers(&self, user_id: u64) -> Result<Vec<UserSummary>> {
        self.client
            .get(&format!("/follows/followers/{user_id}"), None)
            .await
    }

    /// Users `user_id` follows.
    pub async fn following(&self, user_id: u64) -> Result<Vec<UserSummary>> {
        self.client
            .get(&format!("/follows/following/{user_id}"), None)
            .await
    }

    /// Follower/following counters.
    pub async fn stats(&self, user_id: u64) -> Result<FollowStats> {
        self.client
            .get(&format!("/follows/stats/{user_id}"), None)
            .await
    }
}
