//! Post endpoints: feeds, detail, authoring, likes, bookmarks.

use blogkit_core::{Post, PostInput, Result};
use blogkit_http::{AuthClient, Method};

/// Post operations.
#[derive(Debug, Clone)]
pub struct Posts {
    client: AuthClient,
}

impl Posts {
    pub fn new(client: &AuthClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// The main feed.
    pub async fn list(&self) -> Result<Vec<Post>> {
        self.client.get("/posts", None).await
    }

    /// Posts filed under a topic.
    pub async fn by_topic(&self, topic_id: u64) -> Result<Vec<Post>> {
        self.client.get(&format!("/posts/topic/{topic_id}"), None).await
    }

    /// Full post by slug, content included.
    pub async fn by_slug(&self, slug: &str) -> Result<Post> {
        self.client.get(&format!("/posts/slug/{slug}"), None).await
    }

    /// Posts written by a user.
    pub async fn by_user(&self, user_id: u64) -> Result<Vec<Post>> {
        self.client.get(&format!("/posts/user/{user_id}"), None).await
    }

    /// The requesting user's bookmarks.
    pub async fn bookmarked(&self) -> Result<Vec<Post>> {
        self.client.get("/posts/user/bookmarks", None).await
    }

    /// The requesting user's own posts, drafts included.
    pub async fn mine(&self) -> Result<Vec<Post>> {
        self.client.get("/posts/me", None).await
    }

    /// Posts related to the given one.
    pub async fn related(&self, post_id: u64) -> Result<Vec<Post>> {
        self.client.get(&format!("/posts/{post_id}/related"), None).await
    }

    /// Like or unlike a post. Pair with
    /// [`Post::apply_like_toggle`](blogkit_core::Post::apply_like_toggle)
    /// for an immediate local update.
    pub async fn toggle_like(&self, post_id: u64) -> Result<()> {
        self.client
            .send_unit(Method::POST, &format!("/posts/{post_id}/like"), None)
            .await
    }

    /// Bookmark or unbookmark a post.
    pub async fn toggle_bookmark(&self, post_id: u64) -> Result<()> {
        self.client
            .send_unit(Method::POST, &format!("/posts/{post_id}/bookmark"), None)
            .await
    }

    /// Publish a new post.
    pub async fn create(&self, input: &PostInput) -> Result<Post> {
        self.client
            .post("/posts", Some(serde_json::to_value(input)?))
            .await
    }

    /// Update an existing post.
    pub async fn update(&self, post_id: u64, input: &PostInput) -> Result<()> {
        self.client
            .send_unit(
                Method::PUT,
                &format!("/posts/{post_id}"),
                Some(serde_json::to_value(input)?),
            )
            .await
    }

    /// Delete a post.
    pub async fn delete(&self, post_id: u64) -> Result<()> {
        self.client.delete(&format!("/posts/{post_id}")).await
    }
}
