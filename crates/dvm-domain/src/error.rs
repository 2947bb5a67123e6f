//! Error handling types

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the device manager
///
/// The first five variants are expected, recoverable business conditions
/// that the boundary layer maps to client-visible responses. Everything
/// else is an infrastructure fault and is propagated unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// Requested resource does not exist in the store
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// A state-dependent business rule was violated
    #[error("Domain rule violated: {message}")]
    DomainViolation {
        /// Description of the violated rule
        message: String,
    },

    /// Delete attempted on a device that is currently in use
    #[error("Cannot delete device that is currently in use")]
    DeviceInUse {
        /// Identifier of the device
        id: Uuid,
    },

    /// Version token mismatch detected by the store at write time
    #[error("The resource was modified by another user. Please refresh and try again.")]
    ConcurrencyConflict {
        /// Identifier of the contended device
        id: Uuid,
    },

    /// Patch document targets a forbidden field or is malformed
    #[error("Invalid patch operation: {message}")]
    InvalidPatchOperation {
        /// Description of the offending operation
        message: String,
    },

    /// Request shape validation failed
    #[error("Validation failed: {message}")]
    Validation {
        /// Description of the invalid field(s)
        message: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Cache operation error
    #[error("Cache error: {message}")]
    Cache {
        /// Description of the cache error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Store/database operation error
    #[error("Database error: {message}")]
    Database {
        /// Description of the database error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Domain error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a not found error for a device id
    pub fn device_not_found(id: Uuid) -> Self {
        Self::NotFound {
            resource: format!("Device with id {id}"),
        }
    }

    /// Create a domain rule violation error
    pub fn domain_violation<S: Into<String>>(message: S) -> Self {
        Self::DomainViolation {
            message: message.into(),
        }
    }

    /// Create a device-in-use error
    pub fn device_in_use(id: Uuid) -> Self {
        Self::DeviceInUse { id }
    }

    /// Create a concurrency conflict error
    pub fn concurrency_conflict(id: Uuid) -> Self {
        Self::ConcurrencyConflict { id }
    }

    /// Create an invalid patch operation error
    pub fn invalid_patch<S: Into<String>>(message: S) -> Self {
        Self::InvalidPatchOperation {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create a cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
            source: None,
        }
    }

    /// Create a cache error with source
    pub fn cache_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Cache {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a database error
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    /// Create a database error with source
    pub fn database_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Database {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether this error is an expected, recoverable business condition
    /// (as opposed to an infrastructure fault).
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::DomainViolation { .. }
                | Self::DeviceInUse { .. }
                | Self::ConcurrencyConflict { .. }
                | Self::InvalidPatchOperation { .. }
                | Self::Validation { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_errors_are_expected() {
        let id = Uuid::new_v4();
        assert!(Error::device_not_found(id).is_expected());
        assert!(Error::domain_violation("rename while in use").is_expected());
        assert!(Error::device_in_use(id).is_expected());
        assert!(Error::concurrency_conflict(id).is_expected());
        assert!(Error::invalid_patch("forbidden path").is_expected());
        assert!(Error::validation("name too long").is_expected());
    }

    #[test]
    fn infrastructure_errors_are_not_expected() {
        assert!(!Error::cache("redis unavailable").is_expected());
        assert!(!Error::database("connection refused").is_expected());
        assert!(!Error::configuration("bad provider").is_expected());
    }

    #[test]
    fn concurrency_conflict_message_tells_caller_to_retry() {
        let err = Error::concurrency_conflict(Uuid::new_v4());
        assert_eq!(
            err.to_string(),
            "The resource was modified by another user. Please refresh and try again."
        );
    }
}
