//! Credential storage abstraction.
//!
//! The client reads tokens before every outbound request and writes them
//! on login and refresh. The storage itself is a collaborator the
//! application provides (the browser original keeps it in localStorage);
//! an in-memory implementation ships here for native apps and tests.

use parking_lot::Mutex;
use std::collections::HashMap;

use blogkit_core::Credentials;

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "token";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Process-wide key-value storage for credentials.
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore: Send + Sync {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value.
    fn set(&self, key: &str, value: &str);
    /// Delete a value.
    fn remove(&self, key: &str);
}

/// Typed helpers over the raw key-value interface.
pub trait TokenStoreExt: TokenStore {
    /// The stored access token, if any.
    fn access_token(&self) -> Option<String> {
        self.get(ACCESS_TOKEN_KEY)
    }

    /// The stored refresh token, if any.
    fn refresh_token(&self) -> Option<String> {
        self.get(REFRESH_TOKEN_KEY)
    }

    /// The stored credential pair, when both halves are present.
    fn credentials(&self) -> Option<Credentials> {
        Some(Credentials {
            access_token: self.get(ACCESS_TOKEN_KEY)?,
            refresh_token: self.get(REFRESH_TOKEN_KEY)?,
        })
    }

    /// Store both halves of a credential pair.
    fn store_credentials(&self, credentials: &Credentials) {
        self.set(ACCESS_TOKEN_KEY, &credentials.access_token);
        self.set(REFRESH_TOKEN_KEY, &credentials.refresh_token);
    }

    /// Remove both halves.
    fn clear_credentials(&self) {
        self.remove(ACCESS_TOKEN_KEY);
        self.remove(REFRESH_TOKEN_KEY);
    }
}

impl<S: TokenStore + ?Sized> TokenStoreExt for S {}

/// In-memory token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a credential pair.
    pub fn with_credentials(credentials: Credentials) -> Self {
        let store = Self::new();
        store.store_credentials(&credentials);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.access_token(), None);

        store.store_credentials(&Credentials::new("A1", "R1"));
        assert_eq!(store.access_token().as_deref(), Some("A1"));
        assert_eq!(store.refresh_token().as_deref(), Some("R1"));
        assert_eq!(store.credentials(), Some(Credentials::new("A1", "R1")));

        store.clear_credentials();
        assert_eq!(store.credentials(), None);
    }

    #[test]
    fn test_credentials_requires_both_halves() {
        let store = MemoryTokenStore::new();
        store.set(ACCESS_TOKEN_KEY, "A1");
        assert_eq!(store.credentials(), None);
    }

    #[test]
    fn test_seeded_store() {
        let store = MemoryTokenStore::with_credentials(Credentials::new("A1", "R1"));
        assert_eq!(store.refresh_token().as_deref(), Some("R1"));
    }
}
