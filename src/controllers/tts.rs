use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::tts::{TtsRequest, TtsService},
    error::{AppError, AppResult},
};

/// Largest accepted input; anything bigger must be split by the caller.
const MAX_INPUT_CHARS: usize = 10_000;

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /tts - translate (if needed) and synthesize text to audio
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<TtsRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        if request.input_text.trim().is_empty() {
            return Err(AppError::BadRequest("input_text cannot be empty".to_string()));
        }
        if request.input_text.len() > MAX_INPUT_CHARS {
            return Err(AppError::PayloadTooLarge(format!(
                "input_text must be {MAX_INPUT_CHARS} characters or less"
            )));
        }

        let output = controller.tts_service.synthesize(&request).await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, output.content_type.parse().unwrap());
        headers.insert("X-Backend", output.backend.to_string().parse().unwrap());
        headers.insert(
            "X-Chunk-Count",
            output.chunk_count.to_string().parse().unwrap(),
        );
        headers.insert(
            "X-Cache",
            if output.cache_hit { "hit" } else { "miss" }.parse().unwrap(),
        );

        Ok((StatusCode::OK, headers, Body::from(output.audio)))
    }
}
