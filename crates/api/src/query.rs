//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// List parameters (`?search=&limit=&offset=`).
///
/// `limit` and `offset` are clamped in the handlers via `clamp_limit` /
/// `clamp_offset`; a blank `search` means no filtering.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListParams {
    /// The `ILIKE` pattern for `search`, if any.
    pub fn pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .and_then(linguawise_core::search::contains_pattern)
    }
}
