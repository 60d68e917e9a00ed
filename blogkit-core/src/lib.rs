//! # blogkit-core
//!
//! Core types for the blogkit client SDK.
//!
//! This crate provides the foundational pieces used throughout the
//! blogkit workspace:
//!
//! - **Types**: posts, comments, topics, profiles, users, conversations
//! - **Envelopes**: the `{ success?, message?, data }` wrapper and
//!   paginated listings
//! - **Credentials**: the access/refresh token pair
//! - **Errors**: the error hierarchy shared by the HTTP client and the
//!   endpoint services
//!
//! It also carries the pure data transformations the UI layer performs
//! locally: one-level comment threading and the optimistic like/bookmark
//! toggles.
//!
//! ## Example
//!
//! ```rust
//! use blogkit_core::types::{comment, Comment};
//!
//! let mut threads: Vec<Comment> = vec![];
//! // Fetch threads from the API, then mutate them locally:
//! comment::toggle_like(&mut threads, 42);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod credentials;
pub mod envelope;
pub mod errors;
pub mod types;

// Re-exports for convenience
pub use credentials::{Credentials, RefreshRequest};
pub use envelope::{ApiEnvelope, ErrorBody, Paginated};
pub use errors::{Error, Result, DEFAULT_ERROR_MESSAGE};
pub use types::{
    Comment, CommentInput, Conversation, FollowStats, Post, PostInput, Profile, ProfileInput,
    SocialLinks, Topic, TopicInput, UserSummary,
};

/// Prelude module for common imports.
///
/// ```rust
/// use blogkit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::credentials::{Credentials, RefreshRequest};
    pub use crate::envelope::{ApiEnvelope, Paginated};
    pub use crate::errors::{Error, Result};
    pub use crate::types::{
        Comment, CommentInput, Conversation, FollowStats, Post, PostInput, Profile, ProfileInput,
        Topic, TopicInput, UserSummary,
    };
}
