//! # Session store — the locally cached signed-in user
//!
//! [`SessionStore`] persists the current user's serialized profile under a
//! single fixed key. An absent key means "logged out". The store is typed at
//! the call site so this crate stays ignorant of the user record's shape.
//!
//! Malformed persisted JSON is caught, logged, and treated as absent; it never
//! becomes an error for the caller.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::kv::KeyValueStore;

/// Storage key holding the serialized session user.
pub const SESSION_KEY: &str = "exhibit-session-user";

/// Typed JSON read/write of the current session user.
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The cached user, or `None` when logged out or the record is unreadable.
    pub async fn get<T: DeserializeOwned>(&self) -> Option<T> {
        let raw = self.store.get(SESSION_KEY).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("discarding malformed session record: {err}");
                None
            }
        }
    }

    /// Persist the user, replacing any previous record.
    pub async fn set<T: Serialize>(&self, user: &T) {
        match serde_json::to_string(user) {
            Ok(raw) => self.store.set(SESSION_KEY, raw).await,
            Err(err) => tracing::warn!("failed to serialize session record: {err}"),
        }
    }

    /// Remove the record. The next `get` returns `None`.
    pub async fn clear(&self) {
        self.store.remove(SESSION_KEY).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use serde::Deserialize;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct FakeUser {
        email: String,
        display_name: String,
    }

    fn user() -> FakeUser {
        FakeUser {
            email: "ava@example.com".to_string(),
            display_name: "Ava".to_string(),
        }
    }

    #[tokio::test]
    async fn test_roundtrip() {
        let session = SessionStore::new(MemoryStore::new());

        assert!(session.get::<FakeUser>().await.is_none());

        session.set(&user()).await;
        assert_eq!(session.get::<FakeUser>().await, Some(user()));
    }

    #[tokio::test]
    async fn test_clear() {
        let session = SessionStore::new(MemoryStore::new());
        session.set(&user()).await;

        session.clear().await;
        assert!(session.get::<FakeUser>().await.is_none());
    }

    #[tokio::test]
    async fn test_malformed_record_reads_as_absent() {
        let backing = MemoryStore::new();
        backing.set(SESSION_KEY, "{not json".to_string()).await;

        let session = SessionStore::new(backing);
        assert!(session.get::<FakeUser>().await.is_none());
    }
}
