//! Comments, one level of threaded replies, and the local mutations a
//! comment section performs on them.
//!
//! The platform keeps threads one level deep: replying to a reply files
//! the new comment under the top-level ancestor. The helpers here mirror
//! that rule so local state stays in sync with what the server stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserSummary;

/// A comment on a post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Numeric comment id.
    pub id: u64,
    /// The post this comment belongs to.
    pub post_id: u64,
    /// The author.
    #[serde(default)]
    pub user: Option<UserSummary>,
    /// Comment body.
    pub content: String,
    /// Like count.
    #[serde(default)]
    pub like_count: u64,
    /// Whether the requesting user has liked this comment.
    #[serde(default)]
    pub is_like: bool,
    /// Top-level ancestor id when this comment is a reply.
    #[serde(default)]
    pub parent_id: Option<u64>,
    /// Direct replies. Always empty on replies themselves.
    #[serde(default)]
    pub replies: Vec<Comment>,
    /// Record creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last edit time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Whether this comment is a reply to another comment.
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Apply a like toggle locally: flip the flag and adjust the count.
    pub fn apply_like_toggle(&mut self) {
        if self.is_like {
            self.like_count = self.like_count.saturating_sub(1);
        } else {
            self.like_count += 1;
        }
        self.is_like = !self.is_like;
    }
}

/// Fields accepted when creating a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentInput {
    /// The post to comment on.
    pub post_id: u64,
    /// Comment body.
    pub content: String,
    /// Top-level comment to reply to. Use [`resolve_top_parent`] first if
    /// the user replied to a nested reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
}

/// Resolve the id a reply should be filed under.
///
/// Returns `target_id` itself when it names a top-level comment, or the
/// top-level ancestor when `target_id` names a reply. `None` when the id
/// is not in the thread at all.
pub fn resolve_top_parent(threads: &[Comment], target_id: u64) -> Option<u64> {
    for comment in threads {
        if comment.id == target_id {
            return Some(comment.id);
        }
        if comment.replies.iter().any(|reply| reply.id == target_id) {
            return Some(comment.id);
        }
    }
    None
}

/// Insert a freshly created reply under its top-level parent.
///
/// Returns `false` (leaving the thread untouched) when the parent is
/// missing, which means the thread is stale and should be refetched.
pub fn insert_reply(threads: &mut [Comment], reply: Comment) -> bool {
    let Some(parent_id) = reply.parent_id else {
        return false;
    };
    match threads.iter_mut().find(|c| c.id == parent_id) {
        Some(parent) => {
            parent.replies.push(reply);
            true
        }
        None => false,
    }
}

/// Toggle the like state of a comment anywhere in the thread.
pub fn toggle_like(threads: &mut [Comment], id: u64) -> bool {
    for comment in threads {
        if comment.id == id {
            comment.apply_like_toggle();
            return true;
        }
        if toggle_like(&mut comment.replies, id) {
            return true;
        }
    }
    false
}

/// Replace the content of a comment anywhere in the thread.
pub fn update_content(threads: &mut [Comment], id: u64, content: &str) -> bool {
    for comment in threads {
        if comment.id == id {
            comment.content = content.to_string();
            comment.updated_at = Some(Utc::now());
            return true;
        }
        if update_content(&mut comment.replies, id, content) {
            return true;
        }
    }
    false
}

/// Remove a comment anywhere in the thread. Removing a top-level comment
/// drops its replies with it.
pub fn remove(threads: &mut Vec<Comment>, id: u64) -> bool {
    let before = threads.len();
    threads.retain(|c| c.id != id);
    if threads.len() != before {
        return true;
    }
    threads.iter_mut().any(|c| remove(&mut c.replies, id))
}

/// Total number of comments in the thread, replies included.
pub fn total_count(threads: &[Comment]) -> usize {
    threads.iter().map(|c| 1 + c.replies.len()).sum()
}
