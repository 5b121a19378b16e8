use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T: Clone> Page<T> {
    /// Slice `items` into a 1-based page. Pages past the end are empty but
    /// still report the full `total`.
    pub fn from_slice(items: &[T], page: usize, page_size: usize) -> Self {
        let page = page.max(1);
        let start = (page - 1).saturating_mul(page_size);
        let data = items.iter().skip(start).take(page_size).cloned().collect();
        Self { data, pagination: Pagination { page, page_size, total: items.len() } }
    }
}
