use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::infrastructure::{cache::Caches, config::Config};

pub struct HealthController {
    config: Arc<Config>,
    caches: Arc<Caches>,
}

impl HealthController {
    pub fn new(config: Arc<Config>, caches: Arc<Caches>) -> Self {
        Self { config, caches }
    }

    /// GET /health - credential presence per provider plus cache sizes.
    /// A missing credential is reported here, not at startup.
    pub async fn health(State(controller): State<Arc<HealthController>>) -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "sarvam_configured": controller.config.sarvam_api_key.is_some(),
            "gemini_configured": controller.config.gemini_api_key.is_some(),
            "polly_configured": controller.config.aws_credentials_present,
            "cache_entries": {
                "translation": controller.caches.translation.entry_count().await,
                "audio": controller.caches.audio.entry_count().await,
            },
        }))
    }
}
