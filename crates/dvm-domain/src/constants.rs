//! Domain layer constants
//!
//! Constants that are part of the business rules and are used by the
//! application layer. Infrastructure-specific constants live in
//! `dvm-infrastructure`.

// ============================================================================
// PAGINATION
// ============================================================================

/// Page size used when the caller does not specify one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Maximum page size accepted for collection queries
pub const MAX_PAGE_SIZE: u32 = 100;

// ============================================================================
// CACHE TTL CLASSES
// ============================================================================

/// TTL for single-entity cache entries
pub const CACHE_TTL_SINGLE_DEVICE_SECS: u64 = 300;

/// TTL for filtered collection cache entries (by brand / by state)
pub const CACHE_TTL_COLLECTION_SECS: u64 = 120;

/// TTL for unfiltered collection cache entries
///
/// Broad views go stale fastest, so they get the shortest TTL.
pub const CACHE_TTL_ALL_DEVICES_SECS: u64 = 60;

/// Glob pattern that matches every collection-shaped cache key
pub const COLLECTION_CACHE_PATTERN: &str = "devices:*";

// ============================================================================
// PATCH DENY-LIST
// ============================================================================

/// Patch paths that target read-only fields.
///
/// Matched case-insensitively as substrings of the operation path, so both
/// `/Id` and `/rowVersion` are caught regardless of casing.
pub const FORBIDDEN_PATCH_PATHS: &[&str] = &["/id", "/creationtime", "/createdby", "/rowversion"];
