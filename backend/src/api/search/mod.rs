//! Content-search operation, index query construction and response formatters.

mod search_canvas_annotations;
pub use search_canvas_annotations::{into_search_documents, search_canvas_annotations};

pub mod format_response;
pub mod search_solr;
