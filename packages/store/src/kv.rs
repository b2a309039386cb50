//! The storage contract every backend implements.

/// Async trait for reading and writing string values under fixed keys.
///
/// Implementations are best-effort: a failed read yields `None` and a failed
/// write is dropped. The caller decides what "absent" means for its key.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Option<String>>;
    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl std::future::Future<Output = ()>;
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = ()>;
}
