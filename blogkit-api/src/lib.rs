//! # blogkit-api
//!
//! Typed endpoint services for the blogkit platform API.
//!
//! Each service wraps a cheap clone of the shared [`AuthClient`], so all
//! of them participate in the same authentication state: one login, one
//! token store, one refresh burst at a time.
//!
//! ## Example
//!
//! ```ignore
//! use blogkit_api::BlogApi;
//! use blogkit_http::AuthClient;
//!
//! let client = AuthClient::new("https://api.example.com/api/v1")?;
//! let api = BlogApi::new(client);
//!
//! let posts = api.posts().list().await?;
//! let threads = api.comments().for_post(posts[0].id).await?;
//! ```

#![deny(unsafe_code)]

pub mod auth;
pub mod comments;
pub mod conversations;
pub mod follows;
pub mod posts;
pub mod profiles;
pub mod topics;
pub mod users;

pub use auth::{Auth, LoginInput, RegisterInput, ResetPasswordInput};
pub use comments::Comments;
pub use conversations::Conversations;
pub use follows::Follows;
pub use posts::Posts;
pub use profiles::Profiles;
pub use topics::Topics;
pub use users::Users;

use blogkit_http::AuthClient;

/// Entry point bundling every service over one shared client.
#[derive(Debug, Clone)]
pub struct BlogApi {
    client: AuthClient,
}

impl BlogApi {
    /// Wrap a configured client.
    pub fn new(client: AuthClient) -> Self {
        Self { client }
    }

    /// The underlying client, for direct requests.
    pub fn client(&self) -> &AuthClient {
        &self.client
    }

    pub fn auth(&self) -> Auth {
        Auth::new(&self.client)
    }

    pub fn posts(&self) -> Posts {
        Posts::new(&self.client)
    }

    pub fn comments(&self) -> Comments {
        Comments::new(&self.client)
    }

    pub fn topics(&self) -> Topics {
        Topics::new(&self.client)
    }

    pub fn follows(&self) -> Follows {
        Follows::new(&self.client)
    }

    pub fn profiles(&self) -> Profiles {
        Profiles::new(&self.client)
    }

    pub fn users(&self) -> Users {
        Users::new(&self.client)
    }

    pub fn conversations(&self) -> Conversations {
        Conversations::new(&self.client)
    }
}

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        Auth, BlogApi, Comments, Conversations, Follows, LoginInput, Posts, Profiles,
        RegisterInput, Topics, Users,
    };
}
