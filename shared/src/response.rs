//! API Response types
//!
//! Envelopes the backend wraps around paged lists and errors.

use serde::{Deserialize, Serialize};

/// Paged list response
///
/// ```json
/// { "data": [...], "page": 0, "size": 20, "totalElements": 42 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    /// Not every endpoint fills this in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

impl<T> PageResponse<T> {
    /// Page count, derived from `total_elements` when the server omits it
    pub fn total_pages(&self) -> u32 {
        self.total_pages.unwrap_or_else(|| {
            if self.size == 0 {
                0
            } else {
                self.total_elements.div_ceil(u64::from(self.size)) as u32
            }
        })
    }

    pub fn is_last(&self) -> bool {
        self.page + 1 >= self.total_pages()
    }
}

/// Error body returned on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default, alias = "error")]
    pub code: Option<String>,
    pub message: String,
}
