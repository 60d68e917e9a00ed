//! The access/refresh token pair.

use serde::{Deserialize, Serialize};

/// Credential pair returned by login and refresh.
///
/// The access token is short-lived and attached to every authenticated
/// request; the refresh token is exchanged for a new pair when the access
/// token expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Short-lived bearer token.
    pub access_token: String,
    /// Longer-lived token exchanged at the refresh endpoint.
    pub refresh_token: String,
}

impl Credentials {
    /// Create a credential pair.
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Request body for the refresh endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// The stored refresh token.
    pub refresh_token: String,
}
