use axum::Json;
use serde_json::{json, Value};

use crate::domain::tts::language::{
    INDIAN_LANGUAGES, INTERNATIONAL_LANGUAGES, POLLY_VOICES, SARVAM_SPEAKERS_FEMALE,
    SARVAM_SPEAKERS_MALE,
};

/// GET /speakers - available voice identifiers, partitioned by backend
pub async fn speakers() -> Json<Value> {
    Json(json!({
        "indian": {
            "female": SARVAM_SPEAKERS_FEMALE,
            "male": SARVAM_SPEAKERS_MALE,
        },
        "international": POLLY_VOICES,
    }))
}

/// GET /languages - supported language codes, partitioned by backend
pub async fn languages() -> Json<Value> {
    Json(json!({
        "indian": INDIAN_LANGUAGES,
        "international": INTERNATIONAL_LANGUAGES,
    }))
}
