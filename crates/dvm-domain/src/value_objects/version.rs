//! Opaque optimistic-concurrency token

use serde::{Deserialize, Serialize};

/// Version token carried by every device record.
///
/// The token is advanced by the store adapter on every successful write and
/// compared by the adapter on update. The orchestration layer treats it as
/// opaque: it only reacts to the adapter's conflict signal and never
/// inspects the token itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionToken(u64);

impl VersionToken {
    /// Token assigned to a freshly created record
    pub fn initial() -> Self {
        Self(1)
    }

    /// Token for the next committed write
    pub fn advance(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
