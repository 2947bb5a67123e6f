//! Provider registry resolution tests
//!
//! Linking `dvm-providers` (even just for its types) is what populates the
//! linkme slices, so these tests see the same registry the infrastructure
//! factory does.

use dvm_application::ports::registry::{
    CacheProviderConfig, DeviceStoreConfig, list_cache_providers, list_device_stores,
    resolve_cache_provider, resolve_device_store,
};
use dvm_domain::ports::cache::CacheProvider as _;
use dvm_domain::ports::store::DeviceStore as _;

// Force the provider crate to be linked into this test binary.
#[allow(unused_imports)]
use dvm_providers::cache::NullCacheProvider;

#[test]
fn cache_providers_resolve_by_name() {
    let moka = resolve_cache_provider(&CacheProviderConfig::new("moka").with_max_size(100));
    assert_eq!(moka.unwrap().provider_name(), "moka");

    let null = resolve_cache_provider(&CacheProviderConfig::new("null"));
    assert_eq!(null.unwrap().provider_name(), "null");
}

#[test]
fn device_stores_resolve_by_name() {
    let store = resolve_device_store(&DeviceStoreConfig::new("memory"));
    assert_eq!(store.unwrap().provider_name(), "memory");
}

#[test]
fn unknown_names_are_rejected_with_the_available_set() {
    let err = resolve_cache_provider(&CacheProviderConfig::new("memcached")).unwrap_err();
    assert!(err.contains("memcached"));
    assert!(err.contains("moka"));

    let err = resolve_device_store(&DeviceStoreConfig::new("cosmos")).unwrap_err();
    assert!(err.contains("cosmos"));
}

#[test]
fn listings_cover_the_registered_backends() {
    let cache_names: Vec<&str> = list_cache_providers().iter().map(|(n, _)| *n).collect();
    assert!(cache_names.contains(&"moka"));
    assert!(cache_names.contains(&"null"));

    let store_names: Vec<&str> = list_device_stores().iter().map(|(n, _)| *n).collect();
    assert!(store_names.contains(&"memory"));
}
