//! Content search over OCR text, answered with canvas-anchored annotations.

pub mod api;
pub mod config;
pub mod content_search;
pub mod db_utils;
pub mod error;
pub mod server_extra;
