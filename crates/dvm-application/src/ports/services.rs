//! Device service interface

use crate::dto::{CreateDeviceRequest, DeviceResponse, PaginatedResponse, UpdateDeviceRequest};
use async_trait::async_trait;
use dvm_domain::error::Result;
use dvm_domain::{DeviceFilter, PageRequest, PatchDocument};
use uuid::Uuid;

/// Device orchestration interface
///
/// Every public operation of the device manager enters through this trait.
/// Implementations mediate between the persistent store and the cache,
/// enforce the state-transition guards, and keep cached projections
/// consistent with committed writes.
#[async_trait]
pub trait DeviceServiceInterface: Send + Sync {
    /// Fetch a single device, read-through cached
    async fn get_by_id(&self, id: Uuid) -> Result<DeviceResponse>;

    /// Fetch one page of devices matching a filter, read-through cached
    async fn get_page(
        &self,
        filter: &DeviceFilter,
        page: &PageRequest,
    ) -> Result<PaginatedResponse<DeviceResponse>>;

    /// Create a device on behalf of an actor
    async fn create(&self, request: CreateDeviceRequest, created_by: &str)
    -> Result<DeviceResponse>;

    /// Replace a device's mutable fields
    async fn update(
        &self,
        id: Uuid,
        request: UpdateDeviceRequest,
        modified_by: &str,
    ) -> Result<DeviceResponse>;

    /// Apply a partial update to a device
    async fn patch(
        &self,
        id: Uuid,
        patch: PatchDocument,
        modified_by: &str,
    ) -> Result<DeviceResponse>;

    /// Delete a device; rejected while the device is in use
    async fn delete(&self, id: Uuid) -> Result<()>;
}
