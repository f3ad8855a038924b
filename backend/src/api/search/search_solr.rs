//! Solr select parameters for content-search queries.

use crate::config::ServiceConfig;


/// Escapes a value for use inside a double-quoted Solr phrase.
pub fn quote_solr_phrase(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Select parameters for one page of a highlighted full-text query.
pub fn build_solr_params(
    config: &ServiceConfig,
    query_string: &str,
    canvas_uri: Option<&str>,
    start: u64,
    rows: u64,
) -> Vec<(String, String)> {
    let text_field = config.text_field();
    let hitbox_field = config.hitbox_field();
    let canvas_field = config.canvas_field();

    let mut params = vec![
        ("q".to_string(), format!("{}:({})", text_field, query_string)),
    ];
    if let Some(uri) = canvas_uri.map(str::trim).filter(|u| !u.is_empty()) {
        params.push(("fq".to_string(), format!("{}:{}", canvas_field, quote_solr_phrase(uri))));
    }
    params.extend([
        ("rows".to_string(), rows.to_string()),
        ("start".to_string(), start.to_string()),
        ("wt".to_string(), "json".to_string()),
        ("fl".to_string(), format!("id,{},{}", canvas_field, hitbox_field)),
        ("hl".to_string(), "true".to_string()),
        ("hl.fl".to_string(), text_field),
        ("hl.method".to_string(), "original".to_string()),
        ("hl.simple.pre".to_string(), common::search_const::EMPHASIS_START_TAG.to_string()),
        ("hl.simple.post".to_string(), common::search_const::EMPHASIS_END_TAG.to_string()),
        ("hl.fragsize".to_string(), config.highlight_fragsize.to_string()),
        ("hl.snippets".to_string(), config.highlight_snippets.to_string()),
        ("hl.mergeContiguous".to_string(), "true".to_string()),
    ]);
    params
}

/// Minimal query used to probe index availability.
pub fn build_ping_params() -> Vec<(String, String)> {
    vec![
        ("q".to_string(), "*:*".to_string()),
        ("rows".to_string(), "0".to_string()),
        ("wt".to_string(), "json".to_string()),
    ]
}
