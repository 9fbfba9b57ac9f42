//! # Browser session: bearer token and local preferences
//!
//! [`Session`] is the only piece of client state that outlives a page view. It wraps
//! any [`KeyValueStore`] and exposes the two things the client persists:
//!
//! | Key | Value | Accessors |
//! |-----|-------|-----------|
//! | `"token"` | bearer token returned by `/auth/login` or `/auth/register` | [`Session::token`], [`Session::set_token`], [`Session::clear`] |
//! | `"preferences"` | JSON-encoded [`Preferences`] | [`Session::preferences`], [`Session::save_preferences`] |
//!
//! The backing store is chosen by the caller: `window.localStorage` on the web
//! ([`crate::LocalStorageStore`]) or an in-process [`crate::MemoryStore`] elsewhere.
//!
//! Reads never fail: a missing, empty or undecodable value is reported as absent, so a
//! corrupted entry degrades to "logged out" or "default preferences" instead of an error.

use crate::error::StoreError;
use crate::preferences::Preferences;

pub const TOKEN_KEY: &str = "token";
pub const PREFERENCES_KEY: &str = "preferences";

/// Minimal string key/value storage, shaped after the Web Storage API.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Token and preference persistence on top of a [`KeyValueStore`].
#[derive(Clone)]
pub struct Session<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored bearer token, if any. Blank values count as absent.
    pub fn token(&self) -> Option<String> {
        self.store
            .get(TOKEN_KEY)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) -> Result<(), StoreError> {
        if token.trim().is_empty() {
            return Err(StoreError::EmptyToken);
        }
        self.store.set(TOKEN_KEY, token.trim())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    /// Forget the bearer token. Preferences are kept. A storage failure is logged;
    /// the caller's in-memory logout goes ahead regardless.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(TOKEN_KEY) {
            tracing::warn!("Failed to clear the stored token: {}", e);
        }
    }

    /// Locally saved preferences, or the defaults when nothing valid is stored.
    pub fn preferences(&self) -> Preferences {
        self.stored_preferences().unwrap_or_default()
    }

    /// Locally saved preferences, if a decodable value exists.
    pub fn stored_preferences(&self) -> Option<Preferences> {
        self.store
            .get(PREFERENCES_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    pub fn save_preferences(&self, preferences: &Preferences) -> Result<(), StoreError> {
        let raw = serde_json::to_string(preferences)?;
        self.store.set(PREFERENCES_KEY, &raw)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    /// Storage that accepts writes but refuses removals, like a locked-down browser.
    struct StickyStore(MemoryStore);

    impl KeyValueStore for StickyStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            Err(StoreError::Remove {
                key: key.to_string(),
                reason: "SecurityError".to_string(),
            })
        }
    }

    #[test]
    fn test_clear_reports_failed_removal_without_panicking() {
        let session = Session::new(StickyStore(MemoryStore::new()));
        session.set_token("jwt").unwrap();

        session.clear();
        assert!(session.has_token());

        let err = session.store().remove(TOKEN_KEY).unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to remove `token` from storage: SecurityError"
        );
    }
}
