//! Provider registries
//!
//! Auto-registration system for cache and store backends. Provider crates
//! submit entries into linkme distributed slices at compile time; the
//! infrastructure factory resolves them by name at startup.

pub mod cache;
pub mod store;

pub use cache::{
    CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry, list_cache_providers,
    resolve_cache_provider,
};
pub use store::{
    DEVICE_STORES, DeviceStoreConfig, DeviceStoreEntry, list_device_stores, resolve_device_store,
};
