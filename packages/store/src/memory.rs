use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::StoreError;
use crate::session::KeyValueStore;

/// In-memory KeyValueStore for tests and non-browser builds.
///
/// Clones share the same map, so a clone handed to a [`crate::Session`] sees
/// writes made through any other clone.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::Preferences;
    use crate::session::{Session, PREFERENCES_KEY, TOKEN_KEY};

    #[test]
    fn test_token_lifecycle() {
        let session = Session::new(MemoryStore::new());

        assert!(session.token().is_none());
        assert!(!session.has_token());

        session.set_token("abc.def.ghi").unwrap();
        assert_eq!(session.token().as_deref(), Some("abc.def.ghi"));
        assert!(session.has_token());

        session.clear();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_blank_token_is_absent() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "   ").unwrap();
        let session = Session::new(store);

        assert!(session.token().is_none());
        assert!(session.set_token("").is_err());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());
        session.set_token("shared").unwrap();

        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("shared"));
    }

    #[test]
    fn test_preferences_round_trip_and_survive_logout() {
        let session = Session::new(MemoryStore::new());
        assert_eq!(session.preferences(), Preferences::default());

        let prefs = Preferences {
            weekly_reports: false,
            language: "fr".to_string(),
            ..Preferences::default()
        };
        session.set_token("t").unwrap();
        session.save_preferences(&prefs).unwrap();
        session.clear();

        assert_eq!(session.preferences(), prefs);
    }

    #[test]
    fn test_corrupt_preferences_fall_back_to_defaults() {
        let store = MemoryStore::new();
        store.set(PREFERENCES_KEY, "{not json").unwrap();
        let session = Session::new(store);

        assert_eq!(session.preferences(), Preferences::default());
        assert!(session.stored_preferences().is_none());
    }
}
