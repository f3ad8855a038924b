//! Shared content-search query model.

use serde::{Deserialize, Serialize};

use crate::search_const::DEFAULT_PAGE;


/// Query parameters accepted by the content-search endpoints.
///
/// Every field is optional on the wire so a missing `q` can be reported as a
/// client error rather than a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub uri: Option<String>,
    pub page: Option<u64>,
    pub rows: Option<u64>,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self { q: Some(q.into()), ..Default::default() }
    }

    /// The trimmed free-text term, or `None` when absent or blank.
    pub fn query_string(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    /// 1-based page number; zero is treated as the first page.
    pub fn page_number(&self) -> u64 {
        self.page.unwrap_or(DEFAULT_PAGE).max(1)
    }

    pub fn rows_per_page(&self, default_rows: u64, max_rows: u64) -> u64 {
        self.rows.unwrap_or(default_rows).clamp(1, max_rows.max(1))
    }

    /// Offset of the first row of the requested page.
    pub fn start_offset(&self, default_rows: u64, max_rows: u64) -> u64 {
        (self.page_number() - 1).saturating_mul(self.rows_per_page(default_rows, max_rows))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_const::{DEFAULT_ROWS, MAX_ROWS};

    #[test]
    fn blank_query_string_is_none() {
        let query = SearchQuery::new("   ");
        assert_eq!(query.query_string(), None);
        assert_eq!(SearchQuery::default().query_string(), None);
    }

    #[test]
    fn page_and_rows_are_clamped() {
        let query = SearchQuery { q: Some("fox".into()), uri: None, page: Some(0), rows: Some(5000) };
        assert_eq!(query.page_number(), 1);
        assert_eq!(query.rows_per_page(50, 1000), 1000);
        assert_eq!(query.start_offset(50, 1000), 0);
    }

    #[test]
    fn start_offset_follows_page() {
        let query = SearchQuery { q: Some("fox".into()), uri: None, page: Some(3), rows: Some(20) };
        assert_eq!(query.start_offset(50, 1000), 40);
    }

    #[test]
    fn huge_page_saturates() {
        let query = SearchQuery { q: Some("fox".into()), uri: None, page: Some(u64::MAX), rows: Some(50) };
        assert_eq!(query.start_offset(50, 1000), u64::MAX);
    }

    #[test]
    fn missing_rows_uses_default() {
        let query = SearchQuery::new("fox");
        assert_eq!(query.rows_per_page(DEFAULT_ROWS, MAX_ROWS), DEFAULT_ROWS);
        assert_eq!(query.page_number(), 1);
    }
}
