//! Application configuration root

use crate::config::types::{CacheConfig, LoggingConfig, StoreConfig};
use serde::{Deserialize, Serialize};

/// Root configuration for the device manager
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Device store configuration
    pub store: StoreConfig,

    /// Cache configuration
    pub cache: CacheConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}
