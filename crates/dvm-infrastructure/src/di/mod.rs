//! Service assembly
//!
//! Resolves the configured cache and store backends from the provider
//! registries and wires them into the device service. Linking this crate's
//! `dvm-providers` dependency is what populates the registries.

use crate::config::AppConfig;
use dvm_application::ports::registry::{
    CacheProviderConfig, DeviceStoreConfig, resolve_cache_provider, resolve_device_store,
};
use dvm_application::ports::services::DeviceServiceInterface;
use dvm_application::use_cases::DeviceServiceImpl;
use dvm_domain::error::{Error, Result};
use dvm_domain::ports::cache::CacheProvider;
use dvm_providers::cache::NullCacheProvider;
use std::sync::Arc;
use tracing::info;

/// Factory that assembles application services from configuration
pub struct ServiceFactory {
    config: AppConfig,
}

impl ServiceFactory {
    /// Create a factory for the given configuration
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Build the device service with its configured store and cache
    pub fn build_device_service(&self) -> Result<Arc<dyn DeviceServiceInterface>> {
        let store_config = {
            let mut cfg = DeviceStoreConfig::new(&self.config.store.provider);
            if let Some(uri) = &self.config.store.uri {
                cfg = cfg.with_uri(uri);
            }
            cfg
        };
        let store = resolve_device_store(&store_config).map_err(Error::configuration)?;

        let cache = self.build_cache_provider()?;
        info!(
            store = store.provider_name(),
            cache = cache.provider_name(),
            "device service assembled"
        );

        Ok(Arc::new(DeviceServiceImpl::new(store, cache)))
    }

    /// Resolve the configured cache backend, or the null provider when
    /// caching is disabled
    fn build_cache_provider(&self) -> Result<Arc<dyn CacheProvider>> {
        if !self.config.cache.enabled {
            return Ok(Arc::new(NullCacheProvider::new()));
        }

        let mut cfg = CacheProviderConfig::new(&self.config.cache.provider)
            .with_max_size(self.config.cache.max_size)
            .with_ttl_secs(self.config.cache.default_ttl_secs);
        if let Some(url) = &self.config.cache.redis_url {
            cfg = cfg.with_uri(url);
        }

        resolve_cache_provider(&cfg).map_err(Error::configuration)
    }
}
