//! Device Store Registry
//!
//! Auto-registration system for device store backends, following the same
//! linkme distributed-slice pattern as the cache registry.

use std::sync::Arc;

use dvm_domain::ports::store::DeviceStore;

/// Configuration for device store creation
#[derive(Debug, Clone, Default)]
pub struct DeviceStoreConfig {
    /// Store name (e.g., "memory")
    pub provider: String,
    /// Connection URI (for external stores)
    pub uri: Option<String>,
}

impl DeviceStoreConfig {
    /// Create a new config with the given store name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }
}

/// Registry entry for device stores
pub struct DeviceStoreEntry {
    /// Unique store name (e.g., "memory")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create store instance
    pub factory: fn(&DeviceStoreConfig) -> Result<Arc<dyn DeviceStore>, String>,
}

// Auto-collection via linkme distributed slices - stores submit entries at compile time
#[linkme::distributed_slice]
pub static DEVICE_STORES: [DeviceStoreEntry] = [..];

/// Resolve device store by name from registry
pub fn resolve_device_store(config: &DeviceStoreConfig) -> Result<Arc<dyn DeviceStore>, String> {
    for entry in DEVICE_STORES {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = DEVICE_STORES.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown device store '{}'. Available stores: {:?}",
        config.provider, available
    ))
}

/// List all registered device stores
pub fn list_device_stores() -> Vec<(&'static str, &'static str)> {
    DEVICE_STORES
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
