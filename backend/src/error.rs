//! Request-level failures surfaced to the HTTP layer.
//!
//! Per-record, per-phrase and per-document problems never reach this type;
//! the pipeline absorbs them where they occur.

#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("index unavailable: {0}")]
    IndexUnavailable(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        SearchError::IndexUnavailable(e.to_string())
    }
}
