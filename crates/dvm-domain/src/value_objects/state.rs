//! Device operational state

use serde::{Deserialize, Serialize};

/// Operational state of a device
///
/// All states are mutually reachable by explicit caller-driven transition;
/// nothing transitions a device internally. The current state governs
/// whether identity fields may change and whether the device may be
/// deleted (see the orchestration layer's guards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceState {
    /// Device is available for use
    Available,
    /// Device is currently in use
    InUse,
    /// Device is inactive
    Inactive,
}

impl DeviceState {
    /// Stable name of the state, as used in cache keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::InUse => "InUse",
            Self::Inactive => "Inactive",
        }
    }
}

impl std::fmt::Display for DeviceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
