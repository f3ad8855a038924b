//! Envelope formatters over the shared annotation model.

use common::content_search_response::{
    AnnotationCollection, AnnotationList, ContentAsText, Layer, OrderedCollection, PaintingAnnotation, SearchHit,
    SearchHitV1, TextualAnnotation, TextualBody,
};
use common::search_const::{PRESENTATION_2_CONTEXT, SEARCH_1_CONTEXT, SEARCH_2_CONTEXT};
use common::search_result::{Annotation, CanvasSearchResults};
use url::Url;


#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLinks {
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// Copy of `request_url` with the `page` parameter set, other parameters kept in order.
pub fn with_page(request_url: &Url, page: u64) -> String {
    let mut pairs = request_url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect::<Vec<_>>();
    match pairs.iter_mut().find(|(k, _)| k == "page") {
        Some(pair) => pair.1 = page.to_string(),
        None => pairs.push(("page".to_string(), page.to_string())),
    }

    let mut url = request_url.clone();
    url.query_pairs_mut().clear().extend_pairs(pairs);
    url.to_string()
}

/// `next` when more results exist past this page, `prev` after the first page.
pub fn page_links(request_url: &Url, page: u64, rows: u64, total: u64) -> PageLinks {
    PageLinks {
        next: (total > page.saturating_mul(rows)).then(|| with_page(request_url, page.saturating_add(1))),
        prev: (page > 1).then(|| with_page(request_url, page - 1)),
    }
}

pub fn textual_annotation(annotation: &Annotation) -> TextualAnnotation {
    TextualAnnotation {
        id: annotation.id.clone(),
        kind: "Annotation".to_string(),
        motivation: "highlighting".to_string(),
        target: Some(annotation.canvas_target()),
        body: TextualBody {
            kind: "TextualBody".to_string(),
            value: annotation.text.clone(),
            format: "text/plain".to_string(),
        },
    }
}

/// IIIF Search 2 style collection.
pub fn format_search_2(results: &CanvasSearchResults, request_id: &str, links: PageLinks) -> AnnotationCollection {
    AnnotationCollection {
        context: SEARCH_2_CONTEXT.to_string(),
        id: request_id.to_string(),
        kind: "AnnotationCollection".to_string(),
        within: OrderedCollection {
            kind: "OrderedCollection".to_string(),
            total: results.total,
            next: links.next,
            prev: links.prev,
        },
        resources: results.annotations.iter().map(textual_annotation).collect(),
        hits: results
            .hits
            .iter()
            .map(|hit| SearchHit {
                kind: "Hit".to_string(),
                annotations: hit.annotation_ids.clone(),
                match_text: hit.match_text.clone(),
                before: String::new(),
                after: String::new(),
            })
            .collect(),
    }
}

/// IIIF Search 1 / Presentation 2 annotation list.
pub fn format_search_1(results: &CanvasSearchResults, request_id: &str, links: PageLinks) -> AnnotationList {
    AnnotationList {
        context: vec![PRESENTATION_2_CONTEXT.to_string(), SEARCH_1_CONTEXT.to_string()],
        id: request_id.to_string(),
        kind: "sc:AnnotationList".to_string(),
        within: Layer {
            kind: "sc:Layer".to_string(),
            total: results.total,
            next: links.next,
            prev: links.prev,
        },
        resources: results
            .annotations
            .iter()
            .map(|annotation| PaintingAnnotation {
                id: annotation.id.clone(),
                kind: "oa:Annotation".to_string(),
                motivation: "sc:painting".to_string(),
                resource: ContentAsText {
                    kind: "cnt:ContentAsText".to_string(),
                    chars: annotation.text.clone(),
                },
                on: annotation.canvas_target(),
            })
            .collect(),
        hits: results
            .hits
            .iter()
            .map(|hit| SearchHitV1 {
                kind: "search:Hit".to_string(),
                annotations: hit.annotation_ids.clone(),
                match_text: hit.match_text.clone(),
                before: String::new(),
                after: String::new(),
            })
            .collect(),
    }
}
