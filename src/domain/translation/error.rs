use crate::domain::tts::TtsServiceError;

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("no translation backend configured")]
    NotConfigured,
    #[error("primary translator failed ({primary}); fallback failed ({fallback})")]
    Failed { primary: String, fallback: String },
}

impl From<TranslationError> for TtsServiceError {
    fn from(err: TranslationError) -> Self {
        match err {
            TranslationError::NotConfigured => TtsServiceError::Configuration(
                "translation requires SARVAM_API_KEY or GEMINI_API_KEY".to_string(),
            ),
            failed @ TranslationError::Failed { .. } => {
                TtsServiceError::Translation(failed.to_string())
            }
        }
    }
}
