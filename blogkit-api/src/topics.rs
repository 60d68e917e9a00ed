//! Topic endpoints.

use serde_json::json;

use blogkit_core::{Paginated, Post, Result, Topic, TopicInput};
use blogkit_http::{AuthClient, Method};

/// Topic operations.
#[derive(Debug, Clone)]
pub struct Topics {
    client: AuthClient,
}

impl Topics {
    pub fn new(client: &AuthClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// All topics.
    pub async fn list(&self) -> Result<Vec<Topic>> {
        self.client.get("/topics", None).await
    }

    /// A topic by slug.
    pub async fn by_slug(&self, slug: &str) -> Result<Topic> {
        self.client.get(&format!("/topics/{slug}"), None).await
    }

    /// A topic by numeric id.
    pub async fn by_id(&self, topic_id: u64) -> Result<Topic> {
        self.client.get(&format!("/topics/id/{topic_id}"), None).await
    }

    /// One page of a topic's posts.
    pub async fn posts(&self, slug: &str, page: u32, limit: u32) -> Result<Paginated<Post>> {
        self.client
            .get(
                &format!("/topics/{slug}/posts"),
                Some(json!({ "page": page, "limit": limit })),
            )
            .await
    }

    /// Create a topic.
    pub async fn create(&self, input: &TopicInput) -> Result<Topic> {
        self.client
            .post("/topics", Some(serde_json::to_value(input)?))
            .await
    }

    /// Update a topic.
    pub async fn update(&self, topic_id: u64, input: &TopicInput) -> Result<()> {
        self.client
            .send_unit(
                Method::PUT,
                &format!("/topics/{topic_id}"),
                Some(serde_json::to_value(input)?),
            )
            .await
    }

    /// Delete a topic.
    pub async fn delete(&self, topic_id: u64) -> Result<()> {
        self.client.delete(&format!("/topics/{topic_id}")).await
    }
}
