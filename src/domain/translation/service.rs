use super::error::TranslationError;
use crate::domain::tts::chunker::chunk;
use crate::domain::tts::language::{lingua_language, primary_subtag};
use crate::infrastructure::cache::CacheStore;
use crate::infrastructure::clients::TranslationClient;
use lingua::{LanguageDetector, LanguageDetectorBuilder};
use std::sync::Arc;

/// Sarvam's translate endpoint accepts up to 1000 characters per call.
pub const TRANSLATE_MAX_CHARS: usize = 1000;

/// Translates text before synthesis: primary provider first, general-purpose
/// fallback second, exact-key caching in front of both. Returns the input
/// unchanged, without any network call, when translation is not needed.
pub struct TranslationService {
    primary: Option<Arc<dyn TranslationClient>>,
    fallback: Option<Arc<dyn TranslationClient>>,
    cache: Arc<CacheStore<String>>,
    detector: LanguageDetector,
}

impl TranslationService {
    pub fn new(
        primary: Option<Arc<dyn TranslationClient>>,
        fallback: Option<Arc<dyn TranslationClient>>,
        cache: Arc<CacheStore<String>>,
    ) -> Self {
        let detector = LanguageDetectorBuilder::from_all_languages().build();
        Self {
            primary,
            fallback,
            cache,
            detector,
        }
    }

    pub async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslationError> {
        if source_lang != "auto" && primary_subtag(source_lang) == primary_subtag(target_lang) {
            return Ok(text.to_string());
        }
        if source_lang == "auto" {
            if let Some(expected) = lingua_language(target_lang) {
                if self.detector.detect_language_of(text) == Some(expected) {
                    tracing::debug!(
                        target_lang,
                        "text already in target language, skipping translation"
                    );
                    return Ok(text.to_string());
                }
            }
        }

        let key = format!("{source_lang}|{target_lang}|{text}");
        if let Some(cached) = self.cache.get(&key).await {
            tracing::info!(source_lang, target_lang, "translation cache hit");
            return Ok(cached);
        }

        let segments = chunk(text, TRANSLATE_MAX_CHARS);
        let mut translated = Vec::with_capacity(segments.len());
        for segment in &segments {
            translated.push(
                self.translate_segment(segment.trim(), source_lang, target_lang)
                    .await?,
            );
        }
        let result = translated.join(" ");

        self.cache.insert(key, result.clone()).await;
        Ok(result)
    }

    async fn translate_segment(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslationError> {
        if self.primary.is_none() && self.fallback.is_none() {
            return Err(TranslationError::NotConfigured);
        }

        let primary_err = match &self.primary {
            Some(client) => match client.translate(text, source_lang, target_lang).await {
                Ok(translated) => return Ok(translated),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        source_lang,
                        target_lang,
                        "primary translator failed, trying fallback"
                    );
                    e
                }
            },
            None => "not configured".to_string(),
        };

        let fallback_err = match &self.fallback {
            Some(client) => match client.translate(text, source_lang, target_lang).await {
                Ok(translated) => return Ok(translated),
                Err(e) => {
                    tracing::error!(error = %e, "fallback translator failed");
                    e
                }
            },
            None => "not configured".to_string(),
        };

        Err(TranslationError::Failed {
            primary: primary_err,
            fallback: fallback_err,
        })
    }
}
