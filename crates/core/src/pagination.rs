//! Paginated list envelope shared by every list endpoint.

use serde::{Deserialize, Serialize};

/// The backend's list envelope: `{data, total, page, limit, pages}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u32,
    pub page: u32,
    pub limit: u32,
    pub pages: u32,
}

impl<T> Page<T> {
    /// Wraps an already-complete collection as a single page.
    ///
    /// Used when substituting fixture data for a list endpoint, where the
    /// whole dataset fits one page.
    pub fn single(data: Vec<T>, limit: u32) -> Self {
        let total = data.len() as u32;
        Self {
            data,
            total,
            page: 1,
            limit,
            pages: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
