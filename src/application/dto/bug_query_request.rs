use std::collections::HashMap;

/// Default number of rows per page of a bug grid
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// BugQueryRequest - Request DTO for the bug-list query use case
///
/// Filters are kept as raw parameters; the use case validates them.
#[derive(Debug, Clone)]
pub struct BugQueryRequest {
    /// Index of the first row of the page within the sorted result set
    pub start_row: usize,
    pub rows_per_page: usize,
    /// Raw filter parameters (`package`, `collection`, `version`)
    pub filters: HashMap<String, String>,
}

impl BugQueryRequest {
    pub fn new(start_row: usize, rows_per_page: usize) -> Self {
        Self {
            start_row,
            rows_per_page,
            filters: HashMap::new(),
        }
    }

    pub fn with_filter(mut self, name: &str, value: &str) -> Self {
        self.filters.insert(name.to_string(), value.to_string());
        self
    }
}

impl Default for BugQueryRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_ROWS_PER_PAGE)
    }
}
