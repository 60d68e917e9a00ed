//! Topics group posts by subject.

use serde::{Deserialize, Serialize};

/// A topic a post can be filed under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Numeric topic id.
    pub id: u64,
    /// Topic name shown on badges.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Longer description for the topic page.
    #[serde(default)]
    pub description: Option<String>,
    /// Number of posts filed under this topic.
    #[serde(default)]
    pub posts_count: u64,
}

/// Fields accepted when creating or updating a topic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicInput {
    /// Topic name.
    pub name: String,
    /// Longer description for the topic page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
