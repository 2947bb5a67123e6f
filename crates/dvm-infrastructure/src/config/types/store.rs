//! Store configuration types

use serde::{Deserialize, Serialize};

/// Device store configuration
///
/// `provider` is resolved against the device store registry by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store provider name
    pub provider: String,

    /// Connection URI (for external stores)
    pub uri: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: "memory".to_string(),
            uri: None,
        }
    }
}
