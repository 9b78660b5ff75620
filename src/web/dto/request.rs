//! Request DTOs for the Web API.

use serde::Deserialize;

use crate::board::{BoardSort, PageRequest};

/// Body for updating a board.
#[derive(Debug, Deserialize)]
pub struct UpdateBoardRequest {
    /// New title.
    pub title: String,
    /// New content.
    pub content: String,
}

/// Query parameters for paginated board listings.
#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: i64,
    /// Page size.
    #[serde(default = "default_size")]
    pub size: i64,
    /// Sort criterion: "newest" (default) or "oldest".
    #[serde(default)]
    pub sort: Option<String>,
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    20
}

impl PaginationQuery {
    /// Convert to a storage-layer page request. Unknown sort values fall
    /// back to the default ordering.
    pub fn to_page_request(&self) -> PageRequest {
        let sort = self
            .sort
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(BoardSort::Newest);
        PageRequest::with_sort(self.page, self.size, sort)
    }
}
