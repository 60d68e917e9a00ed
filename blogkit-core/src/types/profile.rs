//! Public profile types.

use serde::{Deserialize, Serialize};

/// Social media links shown on a profile page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    /// Twitter/X profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    /// GitHub profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// LinkedIn profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

/// A user's public profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique handle, also the profile URL segment.
    pub username: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Bio text.
    #[serde(default)]
    pub about: Option<String>,
    /// Personal website URL.
    #[serde(default)]
    pub website: Option<String>,
    /// Social links.
    #[serde(default)]
    pub social: Option<SocialLinks>,
    /// Published post count.
    #[serde(default)]
    pub posts_count: u64,
    /// Follower count.
    #[serde(default)]
    pub followers_count: u64,
    /// Following count.
    #[serde(default)]
    pub following_count: u64,
}

/// Fields accepted when editing a profile. Unset fields are left
/// untouched on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Bio text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// Personal website URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Social links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialLinks>,
}

/// Follower/following counters for a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowStats {
    /// Number of users following this user.
    #[serde(default)]
    pub followers: u64,
    /// Number of users this user follows.
    #[serde(default)]
    pub following: u64,
}
