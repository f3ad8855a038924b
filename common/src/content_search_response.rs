//! Wire shapes of the content-search responses.
//!
//! Two envelope conventions are served from the same annotation model:
//! the IIIF Search 2 style collection and the older Search 1 /
//! Presentation 2 annotation list.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationCollection {
    #[serde(rename = "@context")]
    pub context: String,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub within: OrderedCollection,
    pub resources: Vec<TextualAnnotation>,
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextualAnnotation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub motivation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub body: TextualBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextualBody {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "type")]
    pub kind: String,
    pub annotations: Vec<String>,
    #[serde(rename = "match")]
    pub match_text: String,
    pub before: String,
    pub after: String,
}

// Search 1 / Presentation 2

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationList {
    #[serde(rename = "@context")]
    pub context: Vec<String>,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub within: Layer,
    pub resources: Vec<PaintingAnnotation>,
    pub hits: Vec<SearchHitV1>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    #[serde(rename = "@type")]
    pub kind: String,
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintingAnnotation {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub motivation: String,
    pub resource: ContentAsText,
    pub on: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAsText {
    #[serde(rename = "@type")]
    pub kind: String,
    pub chars: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHitV1 {
    #[serde(rename = "@type")]
    pub kind: String,
    pub annotations: Vec<String>,
    #[serde(rename = "match")]
    pub match_text: String,
    pub before: String,
    pub after: String,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_links_are_omitted() {
        let within = OrderedCollection { kind: "OrderedCollection".into(), total: 3, next: None, prev: None };
        let value = serde_json::to_value(&within).unwrap();
        assert_eq!(value, serde_json::json!({"type": "OrderedCollection", "total": 3}));
    }

    #[test]
    fn hit_match_field_is_renamed() {
        let hit = SearchHit {
            kind: "Hit".into(),
            annotations: vec!["a".into()],
            match_text: "fox".into(),
            before: String::new(),
            after: String::new(),
        };
        let value = serde_json::to_value(&hit).unwrap();
        assert_eq!(value["match"], "fox");
        assert!(value.get("match_text").is_none());
    }
}
