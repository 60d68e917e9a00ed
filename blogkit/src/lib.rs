//! # blogkit - typed client SDK for a blogging platform API
//!
//! blogkit gives native applications the same API surface the platform's
//! web client uses: posts, comments with one-level threaded replies,
//! topics, likes/bookmarks/follows, profiles, and conversations - all on
//! top of an authenticated HTTP client that handles token refresh
//! transparently.
//!
//! ## Quick Start
//!
//! ```ignore
//! use blogkit::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AuthClient::builder("https://api.example.com/api/v1")
//!         .on_auth_lost(|| {
//!             // session is gone; route the user to login
//!         })
//!         .build()?;
//!     let api = BlogApi::new(client);
//!
//!     api.auth()
//!         .login(&LoginInput {
//!             email: "me@example.com".into(),
//!             password: "hunter2".into(),
//!         })
//!         .await?;
//!
//!     for post in api.posts().list().await? {
//!         println!("{} ({} likes)", post.title, post.likes_count);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Token refresh
//!
//! Every request carries the stored access token. When the server rejects
//! it, the client performs **one** refresh for the whole burst of failed
//! requests: the first failure triggers the refresh call, every other
//! failure queues on it, and once the new token pair is stored the queue
//! replays in arrival order. If the refresh itself fails, stored
//! credentials are cleared, the `on_auth_lost` hook fires exactly once,
//! and every affected request fails.
//!
//! ## Architecture
//!
//! blogkit is organized as a workspace of focused crates:
//!
//! - [`blogkit_core`] - domain types, envelopes, errors, and the local
//!   data transformations (comment threading, optimistic toggles)
//! - [`blogkit_http`] - the authenticated client, transport and token
//!   storage seams
//! - [`blogkit_api`] - typed endpoint services

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

// ============================================================================
// Crate Re-exports
// ============================================================================

/// Domain types, envelopes, and errors.
pub use blogkit_core as core;

/// Authenticated HTTP client and its seams.
pub use blogkit_http as http;

/// Typed endpoint services.
pub use blogkit_api as api;

// ============================================================================
// Flat Re-exports
// ============================================================================

// Errors
pub use blogkit_core::{Error, Result};

// Domain types
pub use blogkit_core::{
    ApiEnvelope, Comment, CommentInput, Conversation, Credentials, FollowStats, Paginated, Post,
    PostInput, Profile, ProfileInput, SocialLinks, Topic, TopicInput, UserSummary,
};

// Client
pub use blogkit_http::{
    AuthClient, AuthClientBuilder, MemoryTokenStore, RequestOptions, TokenStore, TokenStoreExt,
    Transport,
};

// Services
pub use blogkit_api::{
    Auth, BlogApi, Comments, Conversations, Follows, LoginInput, Posts, Profiles, RegisterInput,
    ResetPasswordInput, Topics, Users,
};

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient prelude for common imports.
///
/// ```ignore
/// use blogkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::prelude::*;
    pub use crate::http::prelude::*;
    pub use crate::api::prelude::*;
}

// ============================================================================
// Version Information
// ============================================================================

/// Returns the current version of blogkit.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
