use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tts_gateway::controllers::{
    cache::CacheController, health::HealthController, tts::TtsController,
};
use tts_gateway::domain::translation::TranslationService;
use tts_gateway::domain::tts::TtsService;
use tts_gateway::infrastructure::cache::Caches;
use tts_gateway::infrastructure::clients::{
    GeminiClient, PollyTtsClient, SarvamClient, SynthesisClient, TranslationClient,
};
use tts_gateway::infrastructure::config::{Config, LogFormat};
use tts_gateway::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting TTS gateway on {}:{}",
        config.host,
        config.port
    );

    let http_client = reqwest::Client::new();

    // Sarvam covers the Indian-language backend and primary translation.
    let sarvam = config
        .sarvam_api_key
        .clone()
        .map(|key| Arc::new(SarvamClient::new(http_client.clone(), key)));
    if sarvam.is_none() {
        tracing::warn!(
            "SARVAM_API_KEY not set; Indian-language synthesis and primary translation disabled"
        );
    }

    let gemini = config
        .gemini_api_key
        .clone()
        .map(|key| Arc::new(GeminiClient::new(http_client.clone(), key)));
    if gemini.is_none() {
        tracing::warn!("GEMINI_API_KEY not set; fallback translation disabled");
    }

    // International backend only when AWS credentials are present; a missing
    // credential is reported via /health, never a startup failure.
    let polly = if config.aws_credentials_present {
        tracing::info!(region = %config.aws_region, "Initializing AWS Polly client");
        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()))
            .load()
            .await;
        Some(Arc::new(PollyTtsClient::new(Arc::new(
            aws_sdk_polly::Client::new(&aws_config),
        ))))
    } else {
        tracing::warn!("AWS credentials not set; international synthesis backend disabled");
        None
    };

    let config = Arc::new(config);
    let caches = Arc::new(Caches::new());

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate services (inject provider clients and caches)
    tracing::info!("Instantiating services...");
    let translation_service = Arc::new(TranslationService::new(
        sarvam
            .clone()
            .map(|client| client as Arc<dyn TranslationClient>),
        gemini.map(|client| client as Arc<dyn TranslationClient>),
        caches.translation.clone(),
    ));
    let tts_service = Arc::new(TtsService::new(
        translation_service,
        sarvam.map(|client| client as Arc<dyn SynthesisClient>),
        polly.map(|client| client as Arc<dyn SynthesisClient>),
        caches.audio.clone(),
    ));

    // 2. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let tts_controller = Arc::new(TtsController::new(tts_service));
    let health_controller = Arc::new(HealthController::new(config.clone(), caches.clone()));
    let cache_controller = Arc::new(CacheController::new(caches));

    // Start HTTP server with all routes
    start_http_server(config, health_controller, tts_controller, cache_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tts_gateway=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tts_gateway=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
