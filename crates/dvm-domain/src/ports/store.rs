//! Device Store Port
//!
//! Port for durable device storage with optimistic-concurrency support.
//! The store owns id and creation-time assignment and the version-token
//! compare on update; the orchestration layer never inspects tokens.

use crate::entities::{Device, NewDevice};
use crate::error::Result;
use crate::value_objects::{DeviceFilter, PageRequest};
use async_trait::async_trait;
use uuid::Uuid;

/// Device Store Port
///
/// Defines the contract for durable device storage backends.
///
/// # Concurrency
///
/// `update` must compare the version token of the supplied record against
/// the stored one and fail with [`crate::error::Error::ConcurrencyConflict`]
/// when they differ; on success it advances the token. No other operation
/// takes locks, and callers may operate on distinct ids concurrently.
#[async_trait]
pub trait DeviceStore: Send + Sync + std::fmt::Debug {
    /// Fetch a device by id
    ///
    /// # Returns
    /// The device if present, `None` otherwise
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Device>>;

    /// Fetch one page of devices matching a filter
    ///
    /// Items are ordered by creation time. Returns the page items together
    /// with the total number of matching devices.
    async fn get_page(&self, filter: &DeviceFilter, page: &PageRequest)
    -> Result<(Vec<Device>, u64)>;

    /// Persist a new device
    ///
    /// Assigns the id, the creation timestamp, and the initial version
    /// token, and returns the stored record.
    async fn create(&self, device: NewDevice) -> Result<Device>;

    /// Persist changes to an existing device
    ///
    /// Fails with a concurrency conflict if the supplied version token is
    /// stale; on success returns the record with its advanced token.
    async fn update(&self, device: &Device) -> Result<Device>;

    /// Remove a device by id; removing an absent id is a no-op
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Whether a device with this id exists
    async fn exists(&self, id: Uuid) -> Result<bool>;

    /// Get the name/identifier of this store implementation
    fn provider_name(&self) -> &str;
}
