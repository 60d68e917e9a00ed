//! Direct-message conversation types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserSummary;

/// A conversation as shown in the inbox list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Numeric conversation id.
    pub id: u64,
    /// The other participants.
    #[serde(default)]
    pub participants: Vec<UserSummary>,
    /// Preview of the most recent message.
    #[serde(default)]
    pub last_message: Option<String>,
    /// Unread message count for the requesting user.
    #[serde(default)]
    pub unread_count: u64,
    /// Time of the latest activity.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
