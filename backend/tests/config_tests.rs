#![allow(unsafe_code)]

use std::time::Duration;

use backend::config::ServiceConfig;

// Single test so the process environment is not mutated concurrently.
#[test]
fn from_env_reads_all_and_falls_back_on_garbage() {
    unsafe {
        std::env::set_var("SOLR_URL", "http://solr:8983/solr");
        std::env::set_var("SOLR_CORE", "pages");
        std::env::set_var("OCR_LANG_CODE", "fr");
        std::env::set_var("SOLR_TIMEOUT_SECS", "3");
        std::env::set_var("PORT", "not-a-port");
        std::env::set_var("PUBLIC_BASE_URL", "https://iiif.example.org/");
        std::env::set_var("HL_SNIPPETS", "4");
    }

    let cfg = ServiceConfig::from_env();

    assert_eq!(cfg.solr_url, "http://solr:8983/solr");
    assert_eq!(cfg.solr_core, "pages");
    assert_eq!(cfg.lang_code, "fr");
    assert_eq!(cfg.solr_timeout, Duration::from_secs(3));
    assert_eq!(cfg.port, 5000);
    assert_eq!(cfg.public_base_url.as_deref(), Some("https://iiif.example.org"));
    assert_eq!(cfg.highlight_snippets, 4);
    assert_eq!(cfg.select_url(), "http://solr:8983/solr/pages/select");
    assert_eq!(cfg.hitbox_field(), "ocr_hitbox_fr_tsm");

    unsafe {
        for key in ["SOLR_URL", "SOLR_CORE", "OCR_LANG_CODE", "SOLR_TIMEOUT_SECS", "PORT", "PUBLIC_BASE_URL", "HL_SNIPPETS"] {
            std::env::remove_var(key);
        }
    }
}
