//! HTTP surface: router, shared state and handlers.

use std::sync::Arc;

use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use common::content_search_response::{AnnotationCollection, AnnotationList, TextualAnnotation};
use common::search_query::SearchQuery;
use common::search_result::CanvasSearchResults;
use serde::Serialize;
use tracing::{info, warn};
use url::Url;

use crate::api::annotation::annotation_stub;
use crate::api::health::{HealthStatus, check_solr_health};
use crate::api::search::format_response::{PageLinks, format_search_1, format_search_2, page_links};
use crate::api::search::search_canvas_annotations;
use crate::config::ServiceConfig;
use crate::error::SearchError;


#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    /// Shared for connection reuse; carries no per-request state.
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config: Arc::new(config), client: reqwest::Client::new() }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", get(search))
        .route("/search/v1", get(search_v1))
        .route("/annotation/{annotation_id}", get(get_annotation))
        .route("/health", get(health))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        match self {
            SearchError::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })).into_response()
            }
            SearchError::IndexUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, Json(ErrorBody { error: "Solr unavailable".to_string() })).into_response()
            }
        }
    }
}

/// Scheme and authority used for annotation ids and links.
fn request_base_url(config: &ServiceConfig, headers: &HeaderMap) -> String {
    if let Some(base) = &config.public_base_url {
        return base.clone();
    }
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    format!("http://{}", host)
}

async fn run_search(
    st: &AppState,
    uri: &axum::http::Uri,
    headers: &HeaderMap,
    query: &SearchQuery,
) -> Result<(CanvasSearchResults, Url, PageLinks), SearchError> {
    let base_url = request_base_url(&st.config, headers);
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let request_url = Url::parse(&format!("{}{}", base_url, path_and_query))
        .map_err(|e| SearchError::InvalidRequest(format!("invalid request url: {}", e)))?;

    let results = search_canvas_annotations(&st.client, &st.config, query, &base_url).await?;
    let links = page_links(
        &request_url,
        query.page_number(),
        query.rows_per_page(st.config.default_rows, st.config.max_rows),
        results.total,
    );
    Ok((results, request_url, links))
}

async fn search(
    State(st): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Result<Json<AnnotationCollection>, SearchError> {
    let (results, request_url, links) = run_search(&st, &uri, &headers, &query).await?;
    Ok(Json(format_search_2(&results, request_url.as_str(), links)))
}

async fn search_v1(
    State(st): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Result<Json<AnnotationList>, SearchError> {
    let (results, request_url, links) = run_search(&st, &uri, &headers, &query).await?;
    Ok(Json(format_search_1(&results, request_url.as_str(), links)))
}

async fn get_annotation(
    State(st): State<AppState>,
    headers: HeaderMap,
    Path(annotation_id): Path<String>,
) -> Json<TextualAnnotation> {
    info!("Annotation lookup: {}", annotation_id);
    let base_url = request_base_url(&st.config, &headers);
    Json(annotation_stub(&base_url, &annotation_id))
}

async fn health(State(st): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let status = check_solr_health(&st.client, &st.config).await;
    if status.is_healthy() {
        (StatusCode::OK, Json(status))
    } else {
        warn!("reporting unhealthy");
        (StatusCode::SERVICE_UNAVAILABLE, Json(status))
    }
}
