//! Response envelopes used by the platform API.
//!
//! Every endpoint wraps its payload in `{ success?, message?, data }`.
//! List endpoints that paginate wrap a [`Paginated`] page inside `data`.

use serde::{Deserialize, Serialize};

use crate::errors::DEFAULT_ERROR_MESSAGE;

/// Standard response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the operation succeeded, when the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Human-readable message, mostly present on errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The payload.
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope, discarding metadata.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Error payload shape. `data` is absent or null on failures, so this is
/// decoded separately from [`ApiEnvelope`].
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Server-provided error message.
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extract the upstream message from a raw error body, falling back to
    /// [`DEFAULT_ERROR_MESSAGE`] when the body is not an envelope or has
    /// no message.
    pub fn message_from_bytes(body: &[u8]) -> String {
        serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// 1-based page number.
    pub page: u32,
    /// Page size requested.
    pub limit: u32,
    /// Total number of items across all pages.
    pub total: u64,
}

impl<T> Paginated<T> {
    /// Total number of pages at the current page size.
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit)) as u32
    }

    /// Whether another page follows this one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}
