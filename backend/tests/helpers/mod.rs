#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use backend::config::ServiceConfig;
use backend::server_extra::{AppState, router};
use tower::ServiceExt;

pub type CapturedParams = Arc<Mutex<Vec<Vec<(String, String)>>>>;

#[derive(Clone)]
struct FakeSolr {
    status: StatusCode,
    body: serde_json::Value,
    delay: Duration,
    captured: CapturedParams,
}

async fn fake_select(
    State(fake): State<FakeSolr>,
    Query(params): Query<Vec<(String, String)>>,
) -> (StatusCode, Json<serde_json::Value>) {
    fake.captured.lock().unwrap().push(params);
    if !fake.delay.is_zero() {
        tokio::time::sleep(fake.delay).await;
    }
    (fake.status, Json(fake.body.clone()))
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Serves `body` at `/solr/texts/select` and returns a config pointing at it.
pub async fn spawn_fake_solr(
    status: StatusCode,
    body: serde_json::Value,
    delay: Duration,
) -> (ServiceConfig, CapturedParams) {
    let captured: CapturedParams = Arc::new(Mutex::new(Vec::new()));
    let fake = FakeSolr { status, body, delay, captured: captured.clone() };
    let app = Router::new().route("/solr/texts/select", get(fake_select)).with_state(fake);
    let addr = serve(app).await;

    let config = ServiceConfig {
        solr_url: format!("http://{}/solr", addr),
        solr_timeout: Duration::from_secs(5),
        health_timeout: Duration::from_secs(5),
        ..Default::default()
    };
    (config, captured)
}

pub async fn get_json(config: ServiceConfig, uri: &str) -> (StatusCode, serde_json::Value) {
    let app = router(AppState::new(config));
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .header("host", "search.example.org")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

pub fn param<'a>(params: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    params.iter().filter(|(k, _)| k == key).map(|(_, v)| v.as_str()).collect()
}

pub fn fox_response(num_found: u64) -> serde_json::Value {
    serde_json::json!({
        "responseHeader": {"status": 0},
        "response": {
            "numFound": num_found,
            "start": 0,
            "docs": [
                {
                    "id": "page-1",
                    "canvas_id_ssi": "https://example.org/iiif/book/canvas/1",
                    "ocr_hitbox_en_tsm": ["The|0 0 10 10", "quick|12 0 30 10", "brown|32 0 50 10", "fox|52 0 70 10"]
                }
            ]
        },
        "highlighting": {
            "page-1": {"ocr_text_en_tsimv": ["The <em>quick brown</em> fox"]}
        }
    })
}
