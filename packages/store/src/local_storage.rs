//! # Browser localStorage store — web-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] implementation used on the
//! **web platform**. The session user and moodboard are small JSON strings
//! under fixed keys, which is exactly the shape `window.localStorage` is made
//! for — synchronous string reads survive page reloads and need no schema.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled or a full quota
//! degrades to "no local data" rather than crashing; the authoritative copy of
//! anything that matters lives on the server.

use crate::kv::KeyValueStore;

/// localStorage-backed KeyValueStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    async fn set(&self, key: &str, value: String) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, &value);
        }
    }

    async fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
