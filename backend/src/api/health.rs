//! Index connectivity probe.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::api::search::search_solr::build_ping_params;
use crate::config::ServiceConfig;
use crate::db_utils::solr_utils::solr_select;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solr_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solr_core: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

pub async fn check_solr_health(client: &reqwest::Client, config: &ServiceConfig) -> HealthStatus {
    match solr_select(client, &config.select_url(), &build_ping_params(), config.health_timeout).await {
        Ok(_) => HealthStatus {
            status: "healthy".to_string(),
            solr: Some("connected".to_string()),
            solr_url: Some(config.solr_url.clone()),
            solr_core: Some(config.solr_core.clone()),
            error: None,
        },
        Err(e) => {
            error!(error = %e, "health check failed");
            HealthStatus {
                status: "unhealthy".to_string(),
                solr: None,
                solr_url: None,
                solr_core: None,
                error: Some(e.to_string()),
            }
        }
    }
}
