//! Infrastructure layer constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "DVM";

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "device-manager.toml";

/// Default maximum number of cached entries
pub const CACHE_DEFAULT_CAPACITY: usize = 10_000;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
