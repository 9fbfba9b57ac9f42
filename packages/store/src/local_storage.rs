//! # `window.localStorage` backend: browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**. The
//! bearer token lives under the same `"token"` key the backend's other clients use, so a
//! session started elsewhere on the same origin is picked up.
//!
//! ## Error handling
//!
//! Reads swallow errors and report the key as absent: private-browsing modes and
//! storage quotas can make `localStorage` throw, and the UI should degrade to
//! "logged out" rather than crash. Writes and removals surface a [`StoreError`] so
//! callers can show or log why a token or preference could not be changed.

use crate::error::StoreError;
use crate::session::KeyValueStore;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `window.localStorage`-backed KeyValueStore.
///
/// Zero-size and `Copy`: the `Storage` handle is looked up on every call because
/// `web_sys::Storage` is not `Send` and the window may not exist during prerender.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(describe(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: describe(&e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Remove {
                key: key.to_string(),
                reason: describe(&e),
            })
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
