//! Process configuration, read once at startup and passed down explicitly.

use std::time::Duration;

use common::search_const::{DEFAULT_ROWS, MAX_ROWS};


#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub solr_url: String,
    pub solr_core: String,
    pub lang_code: String,
    pub solr_timeout: Duration,
    pub health_timeout: Duration,
    pub bind_addr: String,
    pub port: u16,
    /// Prefix for annotation ids; derived from the request host when unset.
    pub public_base_url: Option<String>,
    pub highlight_fragsize: u64,
    pub highlight_snippets: u64,
    pub default_rows: u64,
    pub max_rows: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            solr_url: "http://localhost:8983/solr".to_string(),
            solr_core: "texts".to_string(),
            lang_code: "en".to_string(),
            solr_timeout: Duration::from_secs(10),
            health_timeout: Duration::from_secs(5),
            bind_addr: "0.0.0.0".to_string(),
            port: 5000,
            public_base_url: None,
            highlight_fragsize: 0,
            highlight_snippets: 10,
            default_rows: DEFAULT_ROWS,
            max_rows: MAX_ROWS,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let solr_url = std::env::var("SOLR_URL").unwrap_or(defaults.solr_url);
        let solr_core = std::env::var("SOLR_CORE").unwrap_or(defaults.solr_core);
        let lang_code = std::env::var("OCR_LANG_CODE").unwrap_or(defaults.lang_code);
        let solr_timeout = env_parse("SOLR_TIMEOUT_SECS").map(Duration::from_secs).unwrap_or(defaults.solr_timeout);
        let health_timeout = env_parse("HEALTH_TIMEOUT_SECS").map(Duration::from_secs).unwrap_or(defaults.health_timeout);
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr);
        let port = env_parse("PORT").unwrap_or(defaults.port);
        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .ok()
            .map(|s| s.trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());
        let highlight_fragsize = env_parse("HL_FRAGSIZE").unwrap_or(defaults.highlight_fragsize);
        let highlight_snippets = env_parse("HL_SNIPPETS").unwrap_or(defaults.highlight_snippets);
        let default_rows = env_parse("DEFAULT_ROWS").unwrap_or(defaults.default_rows);
        let max_rows = env_parse("MAX_ROWS").unwrap_or(defaults.max_rows);

        Self {
            solr_url,
            solr_core,
            lang_code,
            solr_timeout,
            health_timeout,
            bind_addr,
            port,
            public_base_url,
            highlight_fragsize,
            highlight_snippets,
            default_rows,
            max_rows,
        }
    }

    /// Full-text field carrying term vectors for the configured language.
    pub fn text_field(&self) -> String {
        format!("ocr_text_{}_tsimv", self.lang_code)
    }

    /// Stored field holding `word|x1 y1 x2 y2` records.
    pub fn hitbox_field(&self) -> String {
        format!("ocr_hitbox_{}_tsm", self.lang_code)
    }

    pub fn canvas_field(&self) -> &'static str {
        "canvas_id_ssi"
    }

    pub fn select_url(&self) -> String {
        format!("{}/{}/select", self.solr_url.trim_end_matches('/'), self.solr_core)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
