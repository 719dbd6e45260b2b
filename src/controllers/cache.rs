use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::infrastructure::cache::Caches;

pub struct CacheController {
    caches: Arc<Caches>,
}

impl CacheController {
    pub fn new(caches: Arc<Caches>) -> Self {
        Self { caches }
    }

    /// DELETE /cache - clear both caches
    pub async fn clear(State(controller): State<Arc<CacheController>>) -> Json<Value> {
        controller.caches.translation.clear().await;
        controller.caches.audio.clear().await;
        Json(json!({
            "message": "translation and audio caches cleared"
        }))
    }

    /// GET /cache/stats - size and up to 10 sample keys per cache
    pub async fn stats(State(controller): State<Arc<CacheController>>) -> Json<Value> {
        Json(json!({
            "translation": controller.caches.translation.stats().await,
            "audio": controller.caches.audio.stats().await,
        }))
    }
}
