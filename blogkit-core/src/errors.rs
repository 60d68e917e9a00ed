//! Error types for blogkit.
//!
//! The hierarchy distinguishes the one failure the client recovers from
//! locally (an expired access token with a refresh token on hand) from
//! everything it surfaces unchanged to the caller.

use thiserror::Error;

/// Fallback message when an error response carries no `message` field.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// The main error type for blogkit operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The access token was rejected and no refresh token is available.
    ///
    /// Not retried; the caller must re-authenticate.
    #[error("authentication expired")]
    AuthExpired,

    /// The refresh endpoint rejected the refresh token, or the refresh
    /// call did not complete within the configured deadline.
    ///
    /// Stored credentials have been cleared and the auth-lost hook fired
    /// by the time this error reaches the caller.
    #[error("token refresh failed: {reason}")]
    RefreshFailed {
        /// Why the refresh was abandoned.
        reason: String,
    },

    /// Any other transport or HTTP failure.
    ///
    /// The message is passed through from the server's error payload when
    /// one is present, otherwise [`DEFAULT_ERROR_MESSAGE`].
    #[error("{message}")]
    Request {
        /// HTTP status code, if the failure produced a response at all.
        status: Option<u16>,
        /// Upstream error message.
        message: String,
    },

    /// The response payload did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Create a request error from an HTTP status and message.
    pub fn request(status: u16, message: impl Into<String>) -> Self {
        Self::Request {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Create a request error with no associated response (network-level).
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Request {
            status: None,
            message: message.into(),
        }
    }

    /// Create a refresh failure.
    pub fn refresh_failed(reason: impl Into<String>) -> Self {
        Self::RefreshFailed {
            reason: reason.into(),
        }
    }

    /// Whether this error means the session is gone for good and the
    /// application should return to its login entry point.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::AuthExpired | Self::RefreshFailed { .. })
    }

    /// The HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => *status,
            _ => None,
        }
    }
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
