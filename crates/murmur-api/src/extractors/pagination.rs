//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use murmur_core::types::pagination::{DEFAULT_PAGE_SIZE, PageRequest};

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 10, max: 100).
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    /// Converts to a `PageRequest`, clamping out-of-range values.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }
}

#[cfg(test)]
mod tests {
    use murmur_core::types::pagination::MAX_PAGE_SIZE;

    use super::*;

    #[test]
    fn oversized_per_page_is_capped() {
        let params = PaginationParams {
            page: 1,
            per_page: 10_000,
        };
        assert_eq!(params.into_page_request().page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn zero_page_becomes_first() {
        let params = PaginationParams {
            page: 0,
            per_page: 0,
        };
        let req = params.into_page_request();
        assert_eq!(req.page, 1);
        assert!(req.page_size >= 1);
    }
}
