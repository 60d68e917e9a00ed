//! # blogkit-http
//!
//! Authenticated HTTP client for the blogkit SDK.
//!
//! The [`AuthClient`] wraps a pluggable [`Transport`], attaches the
//! stored bearer token to every request, and transparently recovers from
//! expired access tokens:
//!
//! - a rejected access token triggers **one** refresh call per failure
//!   burst, however many requests fail concurrently;
//! - requests failing while that refresh is in flight suspend in a FIFO
//!   queue and are replayed, each exactly once, with the new token;
//! - an unrecoverable refresh clears stored credentials and fires the
//!   application's auth-lost hook exactly once.
//!
//! ## Example
//!
//! ```ignore
//! use blogkit_http::AuthClient;
//!
//! let client = AuthClient::builder("https://api.example.com/api/v1")
//!     .on_auth_lost(|| {
//!         // navigate to the login route
//!     })
//!     .build()?;
//!
//! let me: serde_json::Value = client.get("/auth/me", None).await?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod request;
pub mod store;
pub mod transport;

// Re-exports
pub use reqwest::Method;

pub use client::{AuthClient, AuthClientBuilder, AuthLostHook};
pub use config::{ClientConfig, ConfigError, DEFAULT_REFRESH_PATH, DEFAULT_REFRESH_TIMEOUT};
pub use request::{ApiRequest, RequestOptions};
pub use store::{
    MemoryTokenStore, TokenStore, TokenStoreExt, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY,
};
pub use transport::{
    ReqwestTransport, Transport, TransportError, TransportRequest, TransportResponse,
};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        AuthClient, AuthClientBuilder, MemoryTokenStore, RequestOptions, TokenStore,
        TokenStoreExt, Transport,
    };
}
