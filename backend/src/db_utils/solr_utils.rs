//! Raw Solr select response models and the single outbound index call.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::SearchError;

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSolrResponse {
    pub response: RawSolrResult,
    /// document id -> field name -> snippets
    #[serde(default)]
    pub highlighting: Option<BTreeMap<String, BTreeMap<String, Vec<String>>>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSolrResult {
    #[serde(rename = "numFound")]
    pub num_found: u64,
    #[serde(default)]
    pub start: u64,
    #[serde(default)]
    pub docs: Vec<RawSolrDocument>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSolrDocument {
    pub id: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl RawSolrDocument {
    pub fn string_field(&self, name: &str) -> Option<String> {
        match self.fields.get(name)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(values) => values.first().and_then(|v| v.as_str()).map(str::to_string),
            _ => None,
        }
    }

    /// Values of a multi-valued string field; a single string is a one-element list.
    pub fn string_list_field(&self, name: &str) -> Vec<String> {
        match self.fields.get(name) {
            Some(serde_json::Value::Array(values)) => {
                values.iter().filter_map(|v| v.as_str()).map(str::to_string).collect()
            }
            Some(serde_json::Value::String(s)) => vec![s.clone()],
            _ => vec![],
        }
    }
}

impl RawSolrResponse {
    /// Snippets for one document and field, `None` when the index returned none.
    pub fn highlight_snippets(&self, document_id: &str, field: &str) -> Option<Vec<String>> {
        self.highlighting.as_ref()?.get(document_id)?.get(field).cloned()
    }
}

/// Issues one select request. Any transport failure, timeout, non-success
/// status or unparsable body is reported as `IndexUnavailable`.
pub async fn solr_select(
    client: &reqwest::Client,
    select_url: &str,
    params: &[(String, String)],
    timeout: Duration,
) -> Result<RawSolrResponse, SearchError> {
    let t0 = std::time::Instant::now();
    let response = client
        .get(select_url)
        .query(params)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| {
            error!(url = select_url, error = %e, "solr request failed");
            SearchError::from(e)
        })?;
    let status = response.status();
    let response_txt = response.text().await?;
    if !status.is_success() {
        error!(url = select_url, %status, "solr returned an error status");
        return Err(SearchError::IndexUnavailable(format!("{}: {}", status, response_txt)));
    }
    debug!(len = response_txt.len(), took_ms = t0.elapsed().as_millis() as u64, "solr response");

    serde_json::from_str::<RawSolrResponse>(&response_txt).map_err(|e| {
        error!(error = %e, "unparsable solr response");
        SearchError::IndexUnavailable(format!("unparsable response: {}", e))
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "responseHeader": {"status": 0},
        "response": {
            "numFound": 7,
            "start": 0,
            "docs": [
                {"id": "p1", "canvas_id_ssi": "https://example.org/c1", "ocr_hitbox_en_tsm": ["fox|0 0 1 1", "den|2 0 3 1"]},
                {"id": "p2", "ocr_hitbox_en_tsm": "cat|0 0 1 1"}
            ]
        },
        "highlighting": {"p1": {"ocr_text_en_tsimv": ["a <em>fox</em>"]}, "p2": {}}
    }"#;

    #[test]
    fn parses_select_response() {
        let raw: RawSolrResponse = serde_json::from_str(BODY).unwrap();
        assert_eq!(raw.response.num_found, 7);
        assert_eq!(raw.response.docs.len(), 2);

        let first = &raw.response.docs[0];
        assert_eq!(first.string_field("canvas_id_ssi").as_deref(), Some("https://example.org/c1"));
        assert_eq!(first.string_list_field("ocr_hitbox_en_tsm"), vec!["fox|0 0 1 1", "den|2 0 3 1"]);

        let second = &raw.response.docs[1];
        assert_eq!(second.string_field("canvas_id_ssi"), None);
        assert_eq!(second.string_list_field("ocr_hitbox_en_tsm"), vec!["cat|0 0 1 1"]);
    }

    #[test]
    fn highlight_lookup() {
        let raw: RawSolrResponse = serde_json::from_str(BODY).unwrap();
        assert_eq!(raw.highlight_snippets("p1", "ocr_text_en_tsimv"), Some(vec!["a <em>fox</em>".to_string()]));
        assert_eq!(raw.highlight_snippets("p2", "ocr_text_en_tsimv"), None);
        assert_eq!(raw.highlight_snippets("p3", "ocr_text_en_tsimv"), None);
    }

    #[test]
    fn missing_highlighting_section() {
        let raw: RawSolrResponse = serde_json::from_str(r#"{"response": {"numFound": 0, "docs": []}}"#).unwrap();
        assert!(raw.highlighting.is_none());
        assert_eq!(raw.highlight_snippets("p1", "f"), None);
    }
}
