//! # Filesystem-backed key-value store
//!
//! [`FileStore`] persists each key as one file under a base directory. It is
//! used on desktop builds to retain the session and moodboard across app
//! restarts.
//!
//! Use [`dirs::data_dir()`] (in the caller) to obtain a platform-appropriate
//! base, e.g. `~/.local/share/exhibit/` on Linux.

use std::path::PathBuf;

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    async fn set(&self, key: &str, value: String) {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(path, value);
    }

    async fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("exhibit_store_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        store.set("exhibit-session-user", "{}".to_string()).await;

        // Re-open from the same directory
        let store2 = FileStore::new(dir.clone());
        assert_eq!(
            store2.get("exhibit-session-user").await.as_deref(),
            Some("{}")
        );

        store2.remove("exhibit-session-user").await;
        assert!(store2.get("exhibit-session-user").await.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
