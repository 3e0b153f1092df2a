//! Offset/limit pagination for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size when the caller does not supply one.
pub const DEFAULT_LIMIT: u64 = 2;
/// Maximum page size.
pub const MAX_LIMIT: u64 = 100;

/// A bounded window into an ordered result set.
///
/// `page` is 1-based; the skip count is `(page - 1) * limit` and the row
/// count is `limit`. Out-of-range inputs are clamped at construction so
/// every request maps to a well-defined window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request, clamping `page` to at least 1 and
    /// `limit` into `1..=MAX_LIMIT`.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// The number of rows to skip (SQL `OFFSET`).
    ///
    /// Capped so the cast to a signed SQL offset stays in range.
    pub fn skip(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }

    /// The number of rows to fetch (SQL `LIMIT`).
    pub fn take(&self) -> u64 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}
