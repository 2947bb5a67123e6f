//! Device entity

use crate::value_objects::{DeviceState, VersionToken};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A managed inventory device
///
/// `id`, `creation_time`, `created_by`, and `row_version` are owned by the
/// store: they are assigned or advanced on write and are never writable
/// through an update or patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Unique identifier, assigned at creation
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Manufacturer brand
    pub brand: String,
    /// Current operational state
    pub state: DeviceState,
    /// When the device was created
    pub creation_time: DateTime<Utc>,
    /// Actor that created the device
    pub created_by: String,
    /// Actor of the last successful mutation
    pub modified_by: Option<String>,
    /// Time of the last successful mutation
    pub modified_at: Option<DateTime<Utc>>,
    /// Optimistic-concurrency token, advanced by the store on every write
    pub row_version: VersionToken,
}

impl Device {
    /// Materialize a device from a creation payload.
    ///
    /// Store adapters call this once they have assigned an id and a
    /// creation timestamp; the token starts at its initial value.
    pub fn from_new(new: NewDevice, id: Uuid, creation_time: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            brand: new.brand,
            state: new.state,
            creation_time,
            created_by: new.created_by,
            modified_by: None,
            modified_at: None,
            row_version: VersionToken::initial(),
        }
    }

    /// Record who performed a mutation and when
    pub fn touch(&mut self, modified_by: &str, modified_at: DateTime<Utc>) {
        self.modified_by = Some(modified_by.to_string());
        self.modified_at = Some(modified_at);
    }
}

/// Payload for creating a device.
///
/// The store assigns `id`, `creation_time`, and the initial version token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDevice {
    /// Display name
    pub name: String,
    /// Manufacturer brand
    pub brand: String,
    /// Initial operational state
    pub state: DeviceState,
    /// Actor creating the device
    pub created_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_new_sets_store_owned_fields() {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let device = Device::from_new(
            NewDevice {
                name: "iPhone 15".to_string(),
                brand: "Apple".to_string(),
                state: DeviceState::Available,
                created_by: "admin1".to_string(),
            },
            id,
            now,
        );

        assert_eq!(device.id, id);
        assert_eq!(device.creation_time, now);
        assert_eq!(device.created_by, "admin1");
        assert_eq!(device.row_version, VersionToken::initial());
        assert!(device.modified_by.is_none());
        assert!(device.modified_at.is_none());
    }

    #[test]
    fn touch_records_actor_and_time() {
        let mut device = Device::from_new(
            NewDevice {
                name: "Laptop 031".to_string(),
                brand: "Dell".to_string(),
                state: DeviceState::Available,
                created_by: "admin1".to_string(),
            },
            Uuid::new_v4(),
            Utc::now(),
        );

        let at = Utc::now();
        device.touch("admin2", at);
        assert_eq!(device.modified_by.as_deref(), Some("admin2"));
        assert_eq!(device.modified_at, Some(at));
    }
}
