//! Moka in-memory cache provider
//!
//! High-performance, concurrent in-memory cache implementation using Moka.
//!
//! ## Features
//!
//! - High-performance concurrent cache
//! - Per-entry TTL via an expiry policy, so single-entity and collection
//!   entries can carry different lifetimes in the same cache
//! - Glob pattern invalidation by scanning the key space

use async_trait::async_trait;
use dvm_domain::error::{Error, Result};
use dvm_domain::ports::cache::{CacheEntryConfig, CacheProvider, CacheStats};
use globset::Glob;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};

/// Default maximum number of cached entries
const CACHE_DEFAULT_CAPACITY: usize = 10_000;

/// A cached payload together with the TTL it was stored under
#[derive(Clone)]
struct CachedEntry {
    payload: String,
    ttl: Duration,
}

/// Expiry policy that honors the TTL each entry was stored with
struct PerEntryExpiry;

impl Expiry<String, CachedEntry> for PerEntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        entry: &CachedEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// Moka-based in-memory cache provider
///
/// Uses the Moka crate for high-performance concurrent caching. Entry
/// lifetimes come from the [`CacheEntryConfig`] supplied on insert.
#[derive(Clone)]
pub struct MokaCacheProvider {
    cache: Cache<String, CachedEntry>,
    max_size: usize,
}

impl Default for MokaCacheProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaCacheProvider {
    /// Create a new Moka cache provider with default settings
    pub fn new() -> Self {
        Self::with_capacity(CACHE_DEFAULT_CAPACITY)
    }

    /// Create a new Moka cache provider with specified capacity
    pub fn with_capacity(max_size: usize) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_size as u64)
            .expire_after(PerEntryExpiry)
            .build();

        Self { cache, max_size }
    }

    /// Get the maximum capacity of the cache
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

#[async_trait]
impl CacheProvider for MokaCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        Ok(self.cache.get(key).await.map(|entry| entry.payload))
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let entry = CachedEntry {
            payload: value.to_string(),
            ttl: config.effective_ttl(),
        };
        self.cache.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let existed = self.cache.contains_key(key);
        self.cache.invalidate(key).await;
        Ok(existed)
    }

    async fn delete_by_pattern(&self, pattern: &str) -> Result<u64> {
        let matcher = Glob::new(pattern)
            .map_err(|e| {
                Error::cache_with_source(format!("Invalid cache pattern '{pattern}'"), e)
            })?
            .compile_matcher();

        // Snapshot matching keys first; invalidating while iterating is
        // not supported.
        let keys: Vec<String> = self
            .cache
            .iter()
            .filter(|(key, _)| matcher.is_match(key.as_str()))
            .map(|(key, _)| key.as_ref().clone())
            .collect();

        let mut removed = 0u64;
        for key in &keys {
            self.cache.invalidate(key).await;
            removed += 1;
        }
        self.cache.run_pending_tasks().await;
        Ok(removed)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.cache.contains_key(key))
    }

    async fn clear(&self) -> Result<()> {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        // Run pending tasks to ensure entry_count is accurate
        self.cache.run_pending_tasks().await;

        Ok(CacheStats {
            hits: 0,   // Moka doesn't track hits/misses
            misses: 0, // Moka doesn't track hits/misses
            entries: self.cache.entry_count(),
            hit_rate: 0.0, // Unknown
        })
    }

    async fn size(&self) -> Result<usize> {
        // Run pending tasks to ensure entry_count is accurate
        self.cache.run_pending_tasks().await;
        Ok(self.cache.entry_count() as usize)
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheProvider")
            .field("max_size", &self.max_size)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use dvm_application::ports::registry::{CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry};

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static MOKA_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "moka",
    description: "Moka high-performance in-memory cache",
    factory: |config: &CacheProviderConfig| {
        let provider = if let Some(max_size) = config.max_size {
            MokaCacheProvider::with_capacity(max_size)
        } else {
            MokaCacheProvider::new()
        };
        Ok(std::sync::Arc::new(provider))
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_roundtrips() {
        let cache = MokaCacheProvider::new();
        cache
            .set_json("device:1", "{\"name\":\"x\"}", CacheEntryConfig::default())
            .await
            .unwrap();

        let value = cache.get_json("device:1").await.unwrap();
        assert_eq!(value.as_deref(), Some("{\"name\":\"x\"}"));
        assert!(cache.exists("device:1").await.unwrap());
    }

    #[tokio::test]
    async fn delete_reports_whether_key_existed() {
        let cache = MokaCacheProvider::new();
        cache
            .set_json("device:1", "{}", CacheEntryConfig::default())
            .await
            .unwrap();

        assert!(cache.delete("device:1").await.unwrap());
        assert!(!cache.delete("device:1").await.unwrap());
        assert!(cache.get_json("device:1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn pattern_delete_only_touches_matching_keys() {
        let cache = MokaCacheProvider::new();
        let config = CacheEntryConfig::default;
        cache.set_json("device:1", "{}", config()).await.unwrap();
        cache
            .set_json("devices:all:1:10", "{}", config())
            .await
            .unwrap();
        cache
            .set_json("devices:brand:Apple:1:10", "{}", config())
            .await
            .unwrap();

        let removed = cache.delete_by_pattern("devices:*").await.unwrap();
        assert_eq!(removed, 2);
        assert!(cache.get_json("device:1").await.unwrap().is_some());
        assert!(cache.get_json("devices:all:1:10").await.unwrap().is_none());
        assert!(
            cache
                .get_json("devices:brand:Apple:1:10")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn entries_expire_after_their_own_ttl() {
        let cache = MokaCacheProvider::new();
        cache
            .set_json(
                "devices:all:1:10",
                "{}",
                CacheEntryConfig::default().with_ttl(Duration::from_millis(50)),
            )
            .await
            .unwrap();
        cache
            .set_json(
                "device:1",
                "{}",
                CacheEntryConfig::default().with_ttl(Duration::from_secs(300)),
            )
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(cache.get_json("devices:all:1:10").await.unwrap().is_none());
        assert!(cache.get_json("device:1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn invalid_pattern_is_a_cache_error() {
        let cache = MokaCacheProvider::new();
        let err = cache.delete_by_pattern("devices:[").await.unwrap_err();
        assert!(matches!(err, Error::Cache { .. }));
    }
}
