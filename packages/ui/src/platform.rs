//! Shared store constructor for all platforms.
//!
//! Returns the [`store::KeyValueStore`] backend appropriate for the build:
//! - **Web** (WASM + `web` feature): browser localStorage via
//!   [`store::LocalStorageStore`]
//! - **Desktop** (native): filesystem via [`store::FileStore`]

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

/// Create the platform-appropriate key-value store.
pub fn platform_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("exhibit");
        store::FileStore::new(base)
    }
}
