//! Builds annotation and hit records from aligned phrases.

use std::collections::HashSet;

use common::search_result::{Annotation, Hit};
use tracing::debug;

use super::align::{PhraseAlignment, align_phrase};
use super::hitbox::decode_hitboxes;
use super::phrase::{PhraseSpan, extract_phrase_spans};
use super::tokenizer::tokenize_snippet;


/// One matched document as returned by the index, read-only for the pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchDocument {
    pub id: String,
    pub canvas_id: String,
    /// Raw `word|x1 y1 x2 y2` records in OCR reading order.
    pub hitboxes: Vec<String>,
    /// `None` when the index returned no highlighting entry for this document.
    pub highlight_snippets: Option<Vec<String>>,
}

/// Stable id derived from the document id and the raw positions of the matched words.
pub fn annotation_id(annotation_base_url: &str, document_id: &str, alignment: &PhraseAlignment) -> String {
    format!(
        "{}/annotation/{}_{}-{}",
        annotation_base_url.trim_end_matches('/'),
        document_id,
        alignment.first_position,
        alignment.last_position
    )
}

fn build_annotation(
    annotation_base_url: &str,
    document: &SearchDocument,
    phrase: &PhraseSpan,
    alignment: &PhraseAlignment,
) -> Annotation {
    Annotation {
        id: annotation_id(annotation_base_url, &document.id, alignment),
        text: phrase.text(),
        canvas_id: document.canvas_id.clone(),
        bounding_box: alignment.bounding_box,
    }
}

/// Runs decode / tokenize / align / assemble for every document.
///
/// Output order is document, then snippet, then phrase within the snippet.
/// Every aligned phrase yields a hit; a phrase that resolves to an already
/// emitted annotation of the same document references it instead of
/// emitting a duplicate.
pub fn assemble_annotations(documents: &[SearchDocument], annotation_base_url: &str) -> (Vec<Annotation>, Vec<Hit>) {
    let mut annotations = Vec::new();
    let mut hits = Vec::new();

    for document in documents {
        let Some(snippets) = document.highlight_snippets.as_ref() else {
            debug!(document_id = %document.id, "no highlighting for document, skipping annotations");
            continue;
        };

        let hitboxes = decode_hitboxes(&document.hitboxes);
        let mut emitted: HashSet<String> = HashSet::new();

        for snippet in snippets {
            let tokens = tokenize_snippet(snippet);
            for phrase in extract_phrase_spans(&tokens) {
                let Some(alignment) = align_phrase(&phrase, &hitboxes) else {
                    debug!(document_id = %document.id, phrase = %phrase.text(), "phrase not found in hitboxes");
                    continue;
                };
                let annotation = build_annotation(annotation_base_url, document, &phrase, &alignment);
                hits.push(Hit {
                    annotation_ids: vec![annotation.id.clone()],
                    match_text: annotation.text.clone(),
                });
                // a repeat resolves to the first occurrence; its hit reuses that annotation
                if emitted.insert(annotation.id.clone()) {
                    annotations.push(annotation);
                }
            }
        }
    }

    (annotations, hits)
}
