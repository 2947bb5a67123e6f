//! Pagination parameters

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Pagination window for collection queries
///
/// Page numbers are 1-based. Both parameters participate in cache key
/// derivation, so two different page sizes for the same filter are
/// independent cache entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number
    pub page_number: u32,
    /// Number of items per page
    pub page_size: u32,
}

impl PageRequest {
    /// Create a page request
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Check the window against the accepted bounds
    pub fn validate(&self) -> Result<()> {
        if self.page_number < 1 {
            return Err(Error::validation("Page number must be at least 1"));
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            return Err(Error::validation(format!(
                "Page size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        Ok(())
    }

    /// Number of items to skip for this window
    pub fn offset(&self) -> usize {
        (self.page_number as usize - 1) * self.page_size as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_zero_offset() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
    }

    #[test]
    fn rejects_out_of_range_windows() {
        assert!(PageRequest::new(0, 10).validate().is_err());
        assert!(PageRequest::new(1, 0).validate().is_err());
        assert!(PageRequest::new(1, MAX_PAGE_SIZE + 1).validate().is_err());
        assert!(PageRequest::new(1, MAX_PAGE_SIZE).validate().is_ok());
    }
}
