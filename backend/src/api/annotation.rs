//! Annotation lookup.
//!
//! Annotations are derived per request and never stored, so a lookup can
//! only echo the id back with a placeholder body.

use common::content_search_response::{TextualAnnotation, TextualBody};


pub fn annotation_stub(annotation_base_url: &str, annotation_id: &str) -> TextualAnnotation {
    TextualAnnotation {
        id: format!("{}/annotation/{}", annotation_base_url.trim_end_matches('/'), annotation_id),
        kind: "Annotation".to_string(),
        motivation: "highlighting".to_string(),
        target: None,
        body: TextualBody {
            kind: "TextualBody".to_string(),
            value: "Annotation text".to_string(),
            format: "text/plain".to_string(),
        },
    }
}
