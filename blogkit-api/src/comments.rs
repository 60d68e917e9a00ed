//! Comment endpoints.
//!
//! Thread-local mutations (inserting a reply, recursive like toggles)
//! live in [`blogkit_core::types::comment`]; this module only talks to
//! the server.

use serde_json::json;

use blogkit_core::{Comment, CommentInput, Result};
use blogkit_http::{AuthClient, Method};

/// Comment operations.
#[derive(Debug, Clone)]
pub struct Comments {
    client: AuthClient,
}

impl Comments {
    pub fn new(client: &AuthClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// All threads on a post, replies nested one level deep.
    pub async fn for_post(&self, post_id: u64) -> Result<Vec<Comment>> {
        self.client.get(&format!("/comments/post/{post_id}"), None).await
    }

    /// A single comment by id.
    pub async fn get(&self, comment_id: u64) -> Result<Comment> {
        self.client.get(&format!("/comments/{comment_id}"), None).await
    }

    /// Like or unlike a comment.
    pub async fn toggle_like(&self, comment_id: u64) -> Result<()> {
        self.client
            .send_unit(Method::POST, &format!("/comments/{comment_id}/like"), None)
            .await
    }

    /// Post a comment or a reply. Resolve the top-level parent with
    /// [`comment::resolve_top_parent`](blogkit_core::types::comment::resolve_top_parent)
    /// before replying to a nested reply.
    pub async fn create(&self, input: &CommentInput) -> Result<Comment> {
        self.client
            .post("/comments", Some(serde_json::to_value(input)?))
            .await
    }

    /// Edit a comment's content.
    pub async fn update(&self, comment_id: u64, content: &str) -> Result<Comment> {
        self.client
            .put(
                &format!("/comments/{comment_id}"),
                Some(json!({ "content": content })),
            )
            .await
    }

    /// Delete a comment and, for top-level comments, its replies.
    pub async fn delete(&self, comment_id: u64) -> Result<()> {
        self.client.delete(&format!("/comments/{comment_id}")).await
    }
}
