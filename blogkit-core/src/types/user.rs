//! User identity types.

use serde::{Deserialize, Serialize};

/// Compact user representation embedded in posts, comments, and follow
/// listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Numeric user id.
    pub id: u64,
    /// Unique handle.
    pub username: String,
    /// Display name, when set.
    #[serde(default)]
    pub name: Option<String>,
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserSummary {
    /// Best-available display name: `name`, then first/last, then the
    /// username.
    pub fn display_name(&self) -> &str {
        if let Some(name) = self.name.as_deref() {
            return name;
        }
        if let Some(first) = self.first_name.as_deref() {
            return first;
        }
        &self.username
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallback_chain() {
        let mut user = UserSummary {
            id: 1,
            username: "jdoe".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "jdoe");

        user.first_name = Some("Jane".into());
        assert_eq!(user.display_name(), "Jane");

        user.name = Some("Jane Doe".into());
        assert_eq!(user.display_name(), "Jane Doe");
    }
}
