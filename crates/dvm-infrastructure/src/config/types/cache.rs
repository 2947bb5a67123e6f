//! Cache configuration types

use crate::constants::CACHE_DEFAULT_CAPACITY;
use dvm_domain::ports::cache::DEFAULT_CACHE_TTL_SECS;
use serde::{Deserialize, Serialize};

/// Cache configuration
///
/// `provider` is resolved against the cache provider registry by name
/// ("moka", "redis", "null"). When `enabled` is false the null provider is
/// substituted regardless of `provider`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache enabled
    pub enabled: bool,

    /// Cache provider name
    pub provider: String,

    /// Default TTL in seconds, used when an entry carries no TTL class
    pub default_ttl_secs: u64,

    /// Maximum cache size in entries
    pub max_size: usize,

    /// Redis URL (for the Redis provider)
    pub redis_url: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: "moka".to_string(),
            default_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            max_size: CACHE_DEFAULT_CAPACITY,
            redis_url: None,
        }
    }
}
