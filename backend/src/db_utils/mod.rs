//! Index access and highlight-markup helpers.

pub mod decompose_spans;
pub mod solr_utils;
