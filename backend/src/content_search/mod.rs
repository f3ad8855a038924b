//! Reconstruction of matched words and their page coordinates.
//!
//! The index returns highlighted snippets and, separately, the per-word OCR
//! boxes of each document. The two are not keyed to each other, so matched
//! phrases are located in the box sequence by content.

pub mod normalize;
pub mod hitbox;
pub mod tokenizer;
pub mod phrase;
pub mod align;
pub mod assemble;

use common::search_result::CanvasSearchResults;

pub use assemble::SearchDocument;

/// Builds the annotation and hit lists for one page of index results.
///
/// Never fails: malformed records, unmatched phrases and documents without
/// highlighting are skipped.
pub fn build_canvas_search_results(
    documents: &[SearchDocument],
    total: u64,
    annotation_base_url: &str,
) -> CanvasSearchResults {
    let (annotations, hits) = assemble::assemble_annotations(documents, annotation_base_url);
    CanvasSearchResults { annotations, hits, total }
}
