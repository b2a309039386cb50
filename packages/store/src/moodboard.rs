//! # Moodboard store — the local save-for-later cache
//!
//! The moodboard is a list of [`MoodboardEntry`] projections persisted under a
//! single fixed key, owned exclusively by this store. It works with or without
//! server connectivity; server-side saved-post records are reconciled into the
//! local view by [`merge_moodboard_posts`].
//!
//! Every mutation persists the full list back to storage before returning and
//! hands the caller the post-mutation snapshot, so observers can broadcast the
//! new state without a reload.
//!
//! ## Observers
//!
//! Components that render the moodboard (profile view, navbar badge) register
//! a callback via [`Moodboard::subscribe`]. Callbacks run synchronously after
//! each successful add or remove, on the same task — the client is a
//! single-threaded event loop, so there is no delivery reordering to reason
//! about.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::kv::KeyValueStore;
use crate::models::MoodboardEntry;

/// Storage key holding the serialized moodboard list.
pub const MOODBOARD_KEY: &str = "exhibit-moodboard";

/// Handle returned by [`Moodboard::subscribe`], used to unsubscribe.
pub type SubscriptionId = u64;

type Listener = Box<dyn Fn(&[MoodboardEntry])>;

/// The locally persisted moodboard, backed by any [`KeyValueStore`].
#[derive(Clone)]
pub struct Moodboard<S: KeyValueStore> {
    store: S,
    next_id: Rc<RefCell<SubscriptionId>>,
    listeners: Rc<RefCell<HashMap<SubscriptionId, Listener>>>,
}

impl<S: KeyValueStore> Moodboard<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            next_id: Rc::new(RefCell::new(0)),
            listeners: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// The stored list. A missing or unreadable record reads as empty.
    pub async fn load(&self) -> Vec<MoodboardEntry> {
        let Some(raw) = self.store.get(MOODBOARD_KEY).await else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!("discarding malformed moodboard record: {err}");
                Vec::new()
            }
        }
    }

    /// Whether a post id is currently saved.
    pub async fn contains(&self, id: &str) -> bool {
        self.load().await.iter().any(|e| e.id == id)
    }

    /// Save an entry. No-op when the id is already present; otherwise the
    /// entry is prepended, persisted, and broadcast. Returns the resulting
    /// list either way.
    pub async fn add(&self, entry: MoodboardEntry) -> Vec<MoodboardEntry> {
        let mut list = self.load().await;
        if list.iter().any(|e| e.id == entry.id) {
            return list;
        }
        list.insert(0, entry);
        self.persist(&list).await;
        self.notify(&list);
        list
    }

    /// Remove an entry by id. No-op when absent. Returns the resulting list.
    pub async fn remove(&self, id: &str) -> Vec<MoodboardEntry> {
        let mut list = self.load().await;
        let before = list.len();
        list.retain(|e| e.id != id);
        if list.len() == before {
            return list;
        }
        self.persist(&list).await;
        self.notify(&list);
        list
    }

    /// Register a callback invoked with the new list after every mutation.
    pub fn subscribe(&self, listener: impl Fn(&[MoodboardEntry]) + 'static) -> SubscriptionId {
        let mut next = self.next_id.borrow_mut();
        let id = *next;
        *next += 1;
        self.listeners.borrow_mut().insert(id, Box::new(listener));
        id
    }

    /// Drop a previously registered callback. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().remove(&id);
    }

    async fn persist(&self, list: &[MoodboardEntry]) {
        match serde_json::to_string(list) {
            Ok(raw) => self.store.set(MOODBOARD_KEY, raw).await,
            Err(err) => tracing::warn!("failed to serialize moodboard: {err}"),
        }
    }

    fn notify(&self, list: &[MoodboardEntry]) {
        for listener in self.listeners.borrow().values() {
            listener(list);
        }
    }
}

/// Merge server-sourced saved posts with the locally cached moodboard.
///
/// The result is deduplicated by `id` and ordered by first appearance in
/// `local` followed by `server` — all local entries first, in their stored
/// order, then server-only entries. For a colliding id the local (most
/// recently toggled) representation wins.
pub fn merge_moodboard_posts(
    server: &[MoodboardEntry],
    local: &[MoodboardEntry],
) -> Vec<MoodboardEntry> {
    let mut seen = std::collections::HashSet::new();
    let mut merged = Vec::with_capacity(local.len() + server.len());
    for entry in local.iter().chain(server.iter()) {
        if seen.insert(entry.id.clone()) {
            merged.push(entry.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn entry(id: &str, title: &str) -> MoodboardEntry {
        MoodboardEntry {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            image_url: "u".to_string(),
            photographer_name: String::new(),
            created_date: String::new(),
            tags: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_add_stores_and_reports_membership() {
        let board = Moodboard::new(MemoryStore::new());
        assert!(board.load().await.is_empty());

        let list = board.add(entry("p1", "A")).await;
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "p1");
        assert_eq!(list[0].title, "A");
        assert!(board.contains("p1").await);

        // Persisted, not just in memory
        assert_eq!(board.load().await, list);
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let board = Moodboard::new(MemoryStore::new());
        board.add(entry("p1", "A")).await;
        board.add(entry("p2", "B")).await;

        let list = board.add(entry("p1", "A")).await;
        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn test_newest_saved_first() {
        let board = Moodboard::new(MemoryStore::new());
        board.add(entry("p1", "A")).await;
        let list = board.add(entry("p2", "B")).await;

        assert_eq!(list[0].id, "p2");
        assert_eq!(list[1].id, "p1");
    }

    #[tokio::test]
    async fn test_remove_then_contains_is_false() {
        let board = Moodboard::new(MemoryStore::new());
        board.add(entry("p1", "A")).await;

        let list = board.remove("p1").await;
        assert!(list.is_empty());
        assert!(!board.contains("p1").await);

        // Removing again is a no-op
        assert!(board.remove("p1").await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_record_reads_as_empty() {
        let backing = MemoryStore::new();
        backing.set(MOODBOARD_KEY, "[{broken".to_string()).await;

        let board = Moodboard::new(backing);
        assert!(board.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_mutations_broadcast_to_subscribers() {
        let board = Moodboard::new(MemoryStore::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen2 = seen.clone();
        let sub = board.subscribe(move |list| seen2.borrow_mut().push(list.len()));

        board.add(entry("p1", "A")).await;
        board.add(entry("p2", "B")).await;
        board.remove("p1").await;
        // No-op mutations do not broadcast
        board.add(entry("p2", "B")).await;
        board.remove("gone").await;

        assert_eq!(*seen.borrow(), vec![1, 2, 1]);

        board.unsubscribe(sub);
        board.add(entry("p3", "C")).await;
        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn test_merge_prefers_local_and_keeps_order() {
        let server = vec![entry("a", "server-a"), entry("b", "server-b")];
        let local = vec![entry("c", "local-c"), entry("a", "local-a")];

        let merged = merge_moodboard_posts(&server, &local);
        let ids: Vec<&str> = merged.iter().map(|e| e.id.as_str()).collect();

        // Local entries first in stored order, then server-only entries.
        assert_eq!(ids, vec!["c", "a", "b"]);
        // The colliding id keeps the local representation.
        assert_eq!(merged[1].title, "local-a");
    }

    #[test]
    fn test_merge_is_idempotent() {
        let server = vec![entry("a", "server-a"), entry("b", "server-b")];
        let local = vec![entry("b", "local-b"), entry("c", "local-c")];

        let once = merge_moodboard_posts(&server, &local);
        let twice = merge_moodboard_posts(&once, &local);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_with_empty_sides() {
        let entries = vec![entry("a", "A")];
        assert_eq!(merge_moodboard_posts(&entries, &[]), entries);
        assert_eq!(merge_moodboard_posts(&[], &entries), entries);
        assert!(merge_moodboard_posts(&[], &[]).is_empty());
    }
}
