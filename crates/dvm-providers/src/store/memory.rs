//! In-memory device store implementation
//!
//! Stores devices in a concurrent hash map. Data is not persisted and will
//! be lost on restart; useful for development and testing.
//!
//! Optimistic concurrency works the same way as in a durable backend: the
//! version token of an incoming update is compared against the stored one
//! under the map's shard lock, and a mismatch is reported as a conflict.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dvm_domain::entities::{Device, NewDevice};
use dvm_domain::error::{Error, Result};
use dvm_domain::ports::store::DeviceStore;
use dvm_domain::value_objects::{DeviceFilter, PageRequest};
use std::sync::Arc;
use uuid::Uuid;

/// In-memory device store
#[derive(Debug, Default)]
pub struct InMemoryDeviceStore {
    devices: DashMap<Uuid, Device>,
}

impl InMemoryDeviceStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeviceStore for InMemoryDeviceStore {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Device>> {
        Ok(self.devices.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_page(
        &self,
        filter: &DeviceFilter,
        page: &PageRequest,
    ) -> Result<(Vec<Device>, u64)> {
        let mut matching: Vec<Device> = self
            .devices
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();

        let total = matching.len() as u64;

        // Creation order, id as tie-breaker for a stable page layout.
        matching.sort_by_key(|d| (d.creation_time, d.id));
        let items = matching
            .into_iter()
            .skip(page.offset())
            .take(page.page_size as usize)
            .collect();

        Ok((items, total))
    }

    async fn create(&self, device: NewDevice) -> Result<Device> {
        let created = Device::from_new(device, Uuid::new_v4(), Utc::now());
        self.devices.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, device: &Device) -> Result<Device> {
        // A record deleted since the caller's read counts as a conflict,
        // the same as a token mismatch.
        let mut entry = self
            .devices
            .get_mut(&device.id)
            .ok_or_else(|| Error::concurrency_conflict(device.id))?;

        if entry.row_version != device.row_version {
            return Err(Error::concurrency_conflict(device.id));
        }

        let mut stored = device.clone();
        stored.row_version = stored.row_version.advance();
        *entry = stored.clone();
        Ok(stored)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.devices.remove(&id);
        Ok(())
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        Ok(self.devices.contains_key(&id))
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use dvm_application::ports::registry::{DEVICE_STORES, DeviceStoreConfig, DeviceStoreEntry};

/// Factory function for creating in-memory device store instances.
fn memory_store_factory(
    _config: &DeviceStoreConfig,
) -> std::result::Result<Arc<dyn DeviceStore>, String> {
    Ok(Arc::new(InMemoryDeviceStore::new()))
}

#[linkme::distributed_slice(DEVICE_STORES)]
static MEMORY_STORE: DeviceStoreEntry = DeviceStoreEntry {
    name: "memory",
    description: "In-memory device store (fast, non-persistent)",
    factory: memory_store_factory,
};

#[cfg(test)]
mod tests {
    use super::*;
    use dvm_domain::value_objects::DeviceState;

    fn new_device(name: &str, brand: &str, state: DeviceState) -> NewDevice {
        NewDevice {
            name: name.to_string(),
            brand: brand.to_string(),
            state,
            created_by: "admin1".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_time_and_initial_token() {
        let store = InMemoryDeviceStore::new();
        let before = Utc::now();
        let created = store
            .create(new_device("iPhone 15", "Apple", DeviceState::Available))
            .await
            .unwrap();

        assert!(created.creation_time >= before);
        assert_eq!(created.created_by, "admin1");
        assert!(store.exists(created.id).await.unwrap());

        let fetched = store.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn update_advances_the_token() {
        let store = InMemoryDeviceStore::new();
        let created = store
            .create(new_device("Laptop 031", "Dell", DeviceState::Available))
            .await
            .unwrap();

        let mut changed = created.clone();
        changed.name = "Laptop 032".to_string();
        let stored = store.update(&changed).await.unwrap();

        assert_ne!(stored.row_version, created.row_version);
        assert_eq!(
            store.get_by_id(created.id).await.unwrap().unwrap().name,
            "Laptop 032"
        );
    }

    #[tokio::test]
    async fn stale_token_is_a_concurrency_conflict() {
        let store = InMemoryDeviceStore::new();
        let created = store
            .create(new_device("Laptop 031", "Dell", DeviceState::Available))
            .await
            .unwrap();

        // First writer wins and advances the token.
        let mut first = created.clone();
        first.name = "First".to_string();
        store.update(&first).await.unwrap();

        // Second writer still holds the original token.
        let mut second = created.clone();
        second.name = "Second".to_string();
        let err = store.update(&second).await.unwrap_err();
        assert!(matches!(err, Error::ConcurrencyConflict { .. }));

        let current = store.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(current.name, "First");
    }

    #[tokio::test]
    async fn update_of_deleted_record_is_a_concurrency_conflict() {
        let store = InMemoryDeviceStore::new();
        let created = store
            .create(new_device("Laptop 031", "Dell", DeviceState::Available))
            .await
            .unwrap();

        store.delete(created.id).await.unwrap();
        let err = store.update(&created).await.unwrap_err();
        assert!(matches!(err, Error::ConcurrencyConflict { .. }));
    }

    #[tokio::test]
    async fn pages_are_filtered_and_counted() {
        let store = InMemoryDeviceStore::new();
        for i in 0..5 {
            store
                .create(new_device(&format!("Apple {i}"), "Apple", DeviceState::Available))
                .await
                .unwrap();
        }
        for i in 0..3 {
            store
                .create(new_device(&format!("Dell {i}"), "Dell", DeviceState::InUse))
                .await
                .unwrap();
        }

        let (items, total) = store
            .get_page(&DeviceFilter::All, &PageRequest::new(1, 10))
            .await
            .unwrap();
        assert_eq!(total, 8);
        assert_eq!(items.len(), 8);

        let (items, total) = store
            .get_page(
                &DeviceFilter::Brand("Apple".to_string()),
                &PageRequest::new(1, 2),
            )
            .await
            .unwrap();
        assert_eq!(total, 5);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|d| d.brand == "Apple"));

        let (items, total) = store
            .get_page(
                &DeviceFilter::State(DeviceState::InUse),
                &PageRequest::new(2, 2),
            )
            .await
            .unwrap();
        assert_eq!(total, 3);
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let store = InMemoryDeviceStore::new();
        store
            .create(new_device("Laptop 031", "Dell", DeviceState::Available))
            .await
            .unwrap();

        let (items, total) = store
            .get_page(&DeviceFilter::All, &PageRequest::new(5, 10))
            .await
            .unwrap();
        assert_eq!(total, 1);
        assert!(items.is_empty());
    }
}
