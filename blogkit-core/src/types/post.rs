//! Blog post types and the optimistic like/bookmark toggles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::topic::Topic;
use super::user::UserSummary;

/// A blog post as returned by the platform API.
///
/// List endpoints omit `content`; detail endpoints include it. Every
/// other field is defaulted so partial representations decode cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Numeric post id.
    pub id: u64,
    /// Post title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Short description used for cards and meta tags.
    #[serde(default)]
    pub meta_description: Option<String>,
    /// Full body, present on detail responses.
    #[serde(default)]
    pub content: Option<String>,
    /// Cover image URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Topics this post is filed under.
    #[serde(default)]
    pub topics: Vec<Topic>,
    /// The author.
    #[serde(default)]
    pub user: Option<UserSummary>,
    /// Like count.
    #[serde(default)]
    pub likes_count: u64,
    /// Comment count.
    #[serde(default)]
    pub comments_count: u64,
    /// View count.
    #[serde(default)]
    pub views: u64,
    /// Whether the requesting user has liked this post.
    #[serde(default)]
    pub is_like: bool,
    /// Whether the requesting user has bookmarked this post.
    #[serde(default)]
    pub is_bookmark: bool,
    /// When the post went public.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Record creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Apply a like toggle locally: flip the flag and adjust the count.
    ///
    /// UI code calls this before the toggle round-trip resolves so the
    /// button reacts immediately.
    pub fn apply_like_toggle(&mut self) {
        if self.is_like {
            self.likes_count = self.likes_count.saturating_sub(1);
        } else {
            self.likes_count += 1;
        }
        self.is_like = !self.is_like;
    }

    /// Apply a bookmark toggle locally.
    pub fn apply_bookmark_toggle(&mut self) {
        self.is_bookmark = !self.is_bookmark;
    }
}

/// Fields accepted when creating or updating a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostInput {
    /// Post title.
    pub title: String,
    /// Short description for cards and meta tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// Full body.
    pub content: String,
    /// Cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Topic ids to file the post under.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub topic_ids: Vec<u64>,
    /// Whether to publish immediately.
    #[serde(default)]
    pub published: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_like_toggle_roundtrip() {
        let mut post = Post {
            likes_count: 45,
            is_like: false,
            ..Default::default()
        };

        post.apply_like_toggle();
        assert!(post.is_like);
        assert_eq!(post.likes_count, 46);

        post.apply_like_toggle();
        assert!(!post.is_like);
        assert_eq!(post.likes_count, 45);
    }

    #[test]
    fn test_like_toggle_never_underflows() {
        // Server counts can lag behind local state.
        let mut post = Post {
            likes_count: 0,
            is_like: true,
            ..Default::default()
        };
        post.apply_like_toggle();
        assert_eq!(post.likes_count, 0);
    }

    #[test]
    fn test_list_item_decodes_without_content() {
        let json = r#"{
            "id": 3,
            "title": "Hello",
            "slug": "hello",
            "meta_description": "greeting",
            "likes_count": 2,
            "is_like": true,
            "published_at": "2025-06-01T12:00:00Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.content, None);
        assert!(post.is_like);
        assert_eq!(post.topics, vec![]);
    }
}
