//! Request and response shapes for the device use case
//!
//! Responses are the projections that get cached: the orchestrator stores
//! serialized [`DeviceResponse`] / [`PaginatedResponse`] values, never raw
//! entities.

use chrono::{DateTime, Utc};
use dvm_domain::{Device, DeviceState};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request to create a new device
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeviceRequest {
    /// Display name
    #[validate(length(min = 1, max = 100, message = "Name is required and cannot exceed 100 characters"))]
    pub name: String,
    /// Manufacturer brand
    #[validate(length(min = 1, max = 50, message = "Brand is required and cannot exceed 50 characters"))]
    pub brand: String,
    /// Initial operational state
    pub state: DeviceState,
}

/// Request to fully update an existing device
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceRequest {
    /// New display name
    #[validate(length(min = 1, max = 100, message = "Name is required and cannot exceed 100 characters"))]
    pub name: String,
    /// New manufacturer brand
    #[validate(length(min = 1, max = 50, message = "Brand is required and cannot exceed 50 characters"))]
    pub brand: String,
    /// New operational state
    pub state: DeviceState,
}

/// Response containing device information
///
/// The version token stays internal; callers resolve conflicts by
/// re-reading, not by echoing tokens back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResponse {
    /// Unique identifier
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
}

impl From<&Device> for DeviceResponse {
    fn from(device: &Device) -> Self {
        Self {
            id: device.id,
            name: device.name.clone(),
            brand: device.brand.clone(),
            state: device.state,
            creation_time: device.creation_time,
            created_by: device.created_by.clone(),
            modified_by: device.modified_by.clone(),
            modified_at: device.modified_at,
        }
    }
}

/// Paginated response wrapper for collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Total number of matching items across all pages
    pub total_count: u64,
    /// 1-based page number
    pub page_number: u32,
    /// Page size used for this window
    pub page_size: u32,
    /// Total number of pages
    pub total_pages: u32,
    /// Whether a later page exists
    pub has_next: bool,
    /// Whether an earlier page exists
    pub has_previous: bool,
}

impl<T> PaginatedResponse<T> {
    /// Assemble a page from items and the total match count
    pub fn new(items: Vec<T>, total_count: u64, page_number: u32, page_size: u32) -> Self {
        let total_pages = total_count.div_ceil(page_size as u64) as u32;
        Self {
            items,
            total_count,
            page_number,
            page_size,
            total_pages,
            has_next: page_number < total_pages,
            has_previous: page_number > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_math() {
        let page: PaginatedResponse<u32> = PaginatedResponse::new(vec![1, 2, 3], 25, 2, 10);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next);
        assert!(page.has_previous);

        let first: PaginatedResponse<u32> = PaginatedResponse::new(vec![], 25, 1, 10);
        assert!(first.has_next);
        assert!(!first.has_previous);

        let last: PaginatedResponse<u32> = PaginatedResponse::new(vec![], 25, 3, 10);
        assert!(!last.has_next);
        assert!(last.has_previous);

        let empty: PaginatedResponse<u32> = PaginatedResponse::new(vec![], 0, 1, 10);
        assert_eq!(empty.total_pages, 0);
        assert!(!empty.has_next);
        assert!(!empty.has_previous);
    }

    #[test]
    fn create_request_bounds() {
        let valid = CreateDeviceRequest {
            name: "iPhone 15".to_string(),
            brand: "Apple".to_string(),
            state: DeviceState::Available,
        };
        assert!(valid.validate().is_ok());

        let empty_name = CreateDeviceRequest {
            name: String::new(),
            brand: "Apple".to_string(),
            state: DeviceState::Available,
        };
        assert!(empty_name.validate().is_err());

        let long_brand = CreateDeviceRequest {
            name: "iPhone 15".to_string(),
            brand: "B".repeat(51),
            state: DeviceState::Available,
        };
        assert!(long_brand.validate().is_err());
    }
}
