use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    cache::CacheController, catalog, health::HealthController, tts::TtsController,
};
use crate::infrastructure::config::Config;

/// Build the application router. Separated from the server start so tests
/// can drive the full HTTP surface without binding a listener.
pub fn build_router(
    health_controller: Arc<HealthController>,
    tts_controller: Arc<TtsController>,
    cache_controller: Arc<CacheController>,
) -> Router {
    let tts_routes = Router::new()
        .route("/tts", post(TtsController::synthesize))
        .with_state(tts_controller);

    let cache_routes = Router::new()
        .route("/cache", delete(CacheController::clear))
        .route("/cache/stats", get(CacheController::stats))
        .with_state(cache_controller);

    let health_routes = Router::new()
        .route("/health", get(HealthController::health))
        .with_state(health_controller);

    Router::new()
        .route("/speakers", get(catalog::speakers))
        .route("/languages", get(catalog::languages))
        .merge(tts_routes)
        .merge(cache_routes)
        .merge(health_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    health_controller: Arc<HealthController>,
    tts_controller: Arc<TtsController>,
    cache_controller: Arc<CacheController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(health_controller, tts_controller, cache_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
