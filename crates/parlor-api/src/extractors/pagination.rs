//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use parlor_core::types::pagination::{DEFAULT_LIMIT, PageRequest};

/// Query parameters for paginated endpoints.
///
/// Both fields are kept as raw strings so that non-numeric values fall back
/// to the defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<String>,
    /// Items per page (default: 2, max: 100).
    pub limit: Option<String>,
}

impl PaginationParams {
    /// Converts to a `PageRequest`, clamping out-of-range values.
    pub fn into_page_request(self) -> PageRequest {
        let page = self
            .page
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(1);
        let limit = self
            .limit
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_LIMIT);

        PageRequest::new(page, limit)
    }
}
