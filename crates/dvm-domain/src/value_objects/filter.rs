//! Collection query filters

use crate::entities::Device;
use crate::value_objects::DeviceState;

/// Filter applied to paginated collection queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceFilter {
    /// Every device
    All,
    /// Devices of a given brand (exact match)
    Brand(String),
    /// Devices in a given state
    State(DeviceState),
}

impl DeviceFilter {
    /// Whether a device satisfies this filter
    pub fn matches(&self, device: &Device) -> bool {
        match self {
            Self::All => true,
            Self::Brand(brand) => device.brand == *brand,
            Self::State(state) => device.state == *state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::NewDevice;

    fn sample(brand: &str, state: DeviceState) -> Device {
        Device::from_new(
            NewDevice {
                name: "Laptop 031".to_string(),
                brand: brand.to_string(),
                state,
                created_by: "admin1".to_string(),
            },
            uuid::Uuid::new_v4(),
            chrono::Utc::now(),
        )
    }

    #[test]
    fn all_matches_everything() {
        assert!(DeviceFilter::All.matches(&sample("Apple", DeviceState::Available)));
        assert!(DeviceFilter::All.matches(&sample("Dell", DeviceState::InUse)));
    }

    #[test]
    fn brand_filter_is_exact() {
        let filter = DeviceFilter::Brand("Apple".to_string());
        assert!(filter.matches(&sample("Apple", DeviceState::Available)));
        assert!(!filter.matches(&sample("apple", DeviceState::Available)));
        assert!(!filter.matches(&sample("Dell", DeviceState::Available)));
    }

    #[test]
    fn state_filter_matches_state_only() {
        let filter = DeviceFilter::State(DeviceState::InUse);
        assert!(filter.matches(&sample("Apple", DeviceState::InUse)));
        assert!(!filter.matches(&sample("Apple", DeviceState::Inactive)));
    }
}
