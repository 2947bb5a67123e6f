//! Device Service Use Case
//!
//! Application service for device orchestration. Mediates every read and
//! write between the persistent store and the cache: read-through caching
//! with per-class TTLs, coarse write invalidation, state-transition guards,
//! and the restricted partial-update algorithm.

use crate::dto::{CreateDeviceRequest, DeviceResponse, PaginatedResponse, UpdateDeviceRequest};
use crate::ports::services::DeviceServiceInterface;
use chrono::Utc;
use dvm_domain::constants::{
    CACHE_TTL_ALL_DEVICES_SECS, CACHE_TTL_COLLECTION_SECS, CACHE_TTL_SINGLE_DEVICE_SECS,
    COLLECTION_CACHE_PATTERN,
};
use dvm_domain::error::{Error, Result};
use dvm_domain::ports::cache::{CacheEntryConfig, CacheProvider};
use dvm_domain::ports::store::DeviceStore;
use dvm_domain::{Device, DeviceFilter, DevicePatch, DeviceState, NewDevice, PageRequest, PatchDocument};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;
use validator::Validate;

/// Cache key derivation for the device key scheme
///
/// The scheme is part of the external contract and must stay stable:
/// `device:{id}` for single entities, `devices:…` for every
/// collection-shaped key.
mod cache_keys {
    use dvm_domain::{DeviceState, PageRequest};
    use uuid::Uuid;

    #[inline]
    pub fn device(id: Uuid) -> String {
        format!("device:{id}")
    }

    #[inline]
    pub fn all(page: &PageRequest) -> String {
        format!("devices:all:{}:{}", page.page_number, page.page_size)
    }

    #[inline]
    pub fn by_brand(brand: &str, page: &PageRequest) -> String {
        format!(
            "devices:brand:{brand}:{}:{}",
            page.page_number, page.page_size
        )
    }

    #[inline]
    pub fn by_state(state: DeviceState, page: &PageRequest) -> String {
        format!(
            "devices:state:{state}:{}:{}",
            page.page_number, page.page_size
        )
    }
}

/// Device service implementation - orchestrates the store and the cache
pub struct DeviceServiceImpl {
    store: Arc<dyn DeviceStore>,
    cache: Arc<dyn CacheProvider>,
}

impl DeviceServiceImpl {
    /// Create a new device service with injected dependencies
    pub fn new(store: Arc<dyn DeviceStore>, cache: Arc<dyn CacheProvider>) -> Self {
        Self { store, cache }
    }

    /// Map request-shape violations onto the domain error taxonomy
    fn check_request(request: &impl Validate) -> Result<()> {
        request
            .validate()
            .map_err(|e| Error::validation(e.to_string()))
    }

    /// Cache key and TTL class for a collection query
    fn collection_entry(filter: &DeviceFilter, page: &PageRequest) -> (String, Duration) {
        match filter {
            DeviceFilter::All => (
                cache_keys::all(page),
                Duration::from_secs(CACHE_TTL_ALL_DEVICES_SECS),
            ),
            DeviceFilter::Brand(brand) => (
                cache_keys::by_brand(brand, page),
                Duration::from_secs(CACHE_TTL_COLLECTION_SECS),
            ),
            DeviceFilter::State(state) => (
                cache_keys::by_state(*state, page),
                Duration::from_secs(CACHE_TTL_COLLECTION_SECS),
            ),
        }
    }

    /// Read a cached projection, if present
    async fn cache_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.cache.get_json(key).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Store a projection with the given TTL
    async fn cache_set<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.cache
            .set_json(key, &json, CacheEntryConfig::default().with_ttl(ttl))
            .await
    }

    /// Fetch the device or surface `NotFound`
    async fn require_device(&self, id: Uuid) -> Result<Device> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::device_not_found(id))
    }

    /// Guard: while a device is in use its identity fields are frozen
    fn ensure_identity_unchanged(existing: &Device, name: &str, brand: &str) -> Result<()> {
        if existing.state == DeviceState::InUse && (existing.name != name || existing.brand != brand)
        {
            return Err(Error::domain_violation(
                "Cannot update Name or Brand of a device that is currently in use",
            ));
        }
        Ok(())
    }

    /// Drop the projections a committed write may have outdated.
    ///
    /// Best-effort: the store mutation has already committed, so a cache
    /// failure here must not fail the operation. The stale window is
    /// bounded by the collection TTLs.
    async fn invalidate_after_write(&self, id: Uuid) {
        if let Err(e) = self.cache.delete(&cache_keys::device(id)).await {
            warn!(%id, error = %e, "failed to invalidate device cache entry");
        }
        if let Err(e) = self.cache.delete_by_pattern(COLLECTION_CACHE_PATTERN).await {
            warn!(error = %e, "failed to invalidate collection cache entries");
        }
    }
}

#[async_trait::async_trait]
impl DeviceServiceInterface for DeviceServiceImpl {
    async fn get_by_id(&self, id: Uuid) -> Result<DeviceResponse> {
        let cache_key = cache_keys::device(id);
        if let Some(cached) = self.cache_get::<DeviceResponse>(&cache_key).await? {
            debug!(%id, "device cache hit");
            return Ok(cached);
        }

        // A store miss is surfaced, never cached: caching absence would
        // mask a later creation of the same id until the TTL expired.
        let device = self.require_device(id).await?;
        let response = DeviceResponse::from(&device);
        self.cache_set(
            &cache_key,
            &response,
            Duration::from_secs(CACHE_TTL_SINGLE_DEVICE_SECS),
        )
        .await?;
        Ok(response)
    }

    async fn get_page(
        &self,
        filter: &DeviceFilter,
        page: &PageRequest,
    ) -> Result<PaginatedResponse<DeviceResponse>> {
        page.validate()?;

        let (cache_key, ttl) = Self::collection_entry(filter, page);
        if let Some(cached) = self
            .cache_get::<PaginatedResponse<DeviceResponse>>(&cache_key)
            .await?
        {
            debug!(key = %cache_key, "collection cache hit");
            return Ok(cached);
        }

        let (items, total_count) = self.store.get_page(filter, page).await?;
        let response = PaginatedResponse::new(
            items.iter().map(DeviceResponse::from).collect(),
            total_count,
            page.page_number,
            page.page_size,
        );
        self.cache_set(&cache_key, &response, ttl).await?;
        Ok(response)
    }

    async fn create(
        &self,
        request: CreateDeviceRequest,
        created_by: &str,
    ) -> Result<DeviceResponse> {
        Self::check_request(&request)?;

        let created = self
            .store
            .create(NewDevice {
                name: request.name,
                brand: request.brand,
                state: request.state,
                created_by: created_by.to_string(),
            })
            .await?;

        self.invalidate_after_write(created.id).await;
        Ok(DeviceResponse::from(&created))
    }

    async fn update(
        &self,
        id: Uuid,
        request: UpdateDeviceRequest,
        modified_by: &str,
    ) -> Result<DeviceResponse> {
        Self::check_request(&request)?;

        let existing = self.require_device(id).await?;
        Self::ensure_identity_unchanged(&existing, &request.name, &request.brand)?;

        let mut updated = existing;
        updated.name = request.name;
        updated.brand = request.brand;
        updated.state = request.state;
        updated.touch(modified_by, Utc::now());

        let stored = self.store.update(&updated).await?;
        self.invalidate_after_write(id).await;
        Ok(DeviceResponse::from(&stored))
    }

    async fn patch(
        &self,
        id: Uuid,
        patch: PatchDocument,
        modified_by: &str,
    ) -> Result<DeviceResponse> {
        let existing = self.require_device(id).await?;

        // Reject the whole document before anything is applied.
        patch.ensure_patchable()?;

        let mut view = DevicePatch::from_device(&existing);
        patch.apply_to(&mut view)?;

        // Same rule as full update, evaluated against the post-patch view;
        // a field the view dropped keeps its current value.
        let next_name = view.name.as_deref().unwrap_or(&existing.name);
        let next_brand = view.brand.as_deref().unwrap_or(&existing.brand);
        Self::ensure_identity_unchanged(&existing, next_name, next_brand)?;

        // Fields the view no longer defines keep their current values.
        let mut updated = existing;
        if let Some(name) = view.name {
            updated.name = name;
        }
        if let Some(brand) = view.brand {
            updated.brand = brand;
        }
        if let Some(state) = view.state {
            updated.state = state;
        }
        updated.touch(modified_by, Utc::now());

        let stored = self.store.update(&updated).await?;
        self.invalidate_after_write(id).await;
        Ok(DeviceResponse::from(&stored))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let existing = self.require_device(id).await?;
        if existing.state == DeviceState::InUse {
            return Err(Error::device_in_use(id));
        }

        self.store.delete(id).await?;
        self.invalidate_after_write(id).await;
        Ok(())
    }
}
