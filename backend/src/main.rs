use anyhow::Context;
use backend::config::ServiceConfig;
use backend::server_extra::{AppState, router};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ServiceConfig::from_env();
    let addr = config.listen_addr();
    tracing::info!(
        address = %addr,
        solr_url = %config.solr_url,
        solr_core = %config.solr_core,
        lang = %config.lang_code,
        "content search listening"
    );

    let app = router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `RUST_LOG` wins; otherwise `LOG_LEVEL` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match std::env::var("LOG_LEVEL").unwrap_or_default().to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "error" | "critical" => "error",
            _ => "warn",
        };
        EnvFilter::new(level)
    });
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
