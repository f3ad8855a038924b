//! End-to-end content search: one index call, then the annotation pipeline.

use common::search_query::SearchQuery;
use common::search_result::CanvasSearchResults;
use tracing::{debug, info};

use crate::api::search::search_solr::build_solr_params;
use crate::config::ServiceConfig;
use crate::content_search::{SearchDocument, build_canvas_search_results};
use crate::db_utils::solr_utils::{RawSolrResponse, solr_select};
use crate::error::SearchError;


/// Converts raw index documents into pipeline input.
///
/// Documents without a canvas id cannot be anchored and are left out; they
/// still count towards the total reported by the index.
pub fn into_search_documents(raw: &RawSolrResponse, config: &ServiceConfig) -> Vec<SearchDocument> {
    let text_field = config.text_field();
    let hitbox_field = config.hitbox_field();

    raw.response
        .docs
        .iter()
        .filter_map(|doc| {
            let Some(canvas_id) = doc.string_field(config.canvas_field()) else {
                debug!(document_id = %doc.id, "document has no canvas id, skipping");
                return None;
            };
            Some(SearchDocument {
                id: doc.id.clone(),
                canvas_id,
                hitboxes: doc.string_list_field(&hitbox_field),
                highlight_snippets: raw.highlight_snippets(&doc.id, &text_field),
            })
        })
        .collect()
}

pub async fn search_canvas_annotations(
    client: &reqwest::Client,
    config: &ServiceConfig,
    query: &SearchQuery,
    annotation_base_url: &str,
) -> Result<CanvasSearchResults, SearchError> {
    let query_string = query
        .query_string()
        .ok_or_else(|| SearchError::InvalidRequest("Missing required query parameter 'q'".to_string()))?;
    let rows = query.rows_per_page(config.default_rows, config.max_rows);
    let start = query.start_offset(config.default_rows, config.max_rows);

    let params = build_solr_params(config, query_string, query.uri.as_deref(), start, rows);
    let raw = solr_select(client, &config.select_url(), &params, config.solr_timeout).await?;

    let documents = into_search_documents(&raw, config);
    let results = build_canvas_search_results(&documents, raw.response.num_found, annotation_base_url);
    info!(
        query = query_string,
        total = results.total,
        documents = documents.len(),
        annotations = results.annotations.len(),
        "content search"
    );
    Ok(results)
}
