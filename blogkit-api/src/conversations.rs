//! Conversation endpoints.

use blogkit_core::{Conversation, Result};
use blogkit_http::AuthClient;

/// Inbox operations.
#[derive(Debug, Clone)]
pub struct Conversations {
    client: AuthClient,
}

impl Conversations {
    pub fn new(client: &AuthClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// The requesting user's conversations.
    pub async fn list(&self) -> Result<Vec<Conversation>> {
        self.client.get("/conversations", None).await
    }
}
