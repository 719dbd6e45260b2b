use super::assembler::{assemble, SynthesisResult};
use super::chunker::chunk;
use super::error::TtsServiceError;
use super::language::{select_backend, Backend};
use super::{OutputFormat, TtsRequest};
use crate::domain::translation::TranslationService;
use crate::infrastructure::cache::{CacheStore, CachedAudio};
use crate::infrastructure::clients::SynthesisClient;
use std::sync::Arc;

/// Assembled audio ready for the HTTP layer.
#[derive(Debug, Clone)]
pub struct SpeechOutput {
    pub audio: Vec<u8>,
    pub content_type: &'static str,
    pub backend: Backend,
    pub chunk_count: usize,
    pub cache_hit: bool,
}

/// Orchestrates one request end to end:
/// cache lookup, translate if needed, chunk, synthesize per chunk, assemble,
/// cache the result. All-or-nothing; a failing component fails the request.
pub struct TtsService {
    translation: Arc<TranslationService>,
    indian: Option<Arc<dyn SynthesisClient>>,
    international: Option<Arc<dyn SynthesisClient>>,
    audio_cache: Arc<CacheStore<CachedAudio>>,
}

impl TtsService {
    pub fn new(
        translation: Arc<TranslationService>,
        indian: Option<Arc<dyn SynthesisClient>>,
        international: Option<Arc<dyn SynthesisClient>>,
        audio_cache: Arc<CacheStore<CachedAudio>>,
    ) -> Self {
        Self {
            translation,
            indian,
            international,
            audio_cache,
        }
    }

    pub async fn synthesize(&self, request: &TtsRequest) -> Result<SpeechOutput, TtsServiceError> {
        let backend = select_backend(&request.target_lang);
        let client = self.client_for(backend)?;
        let output_format = resolve_output_format(backend, request)?;

        tracing::info!(
            target_lang = %request.target_lang,
            source_lang = %request.source_lang,
            backend = %backend,
            text_length = request.input_text.len(),
            "TTS request received"
        );

        let started = std::time::Instant::now();
        let fingerprint = request.fingerprint();
        if let Some(cached) = self.audio_cache.get(&fingerprint).await {
            tracing::info!(
                backend = %backend,
                audio_size = cached.audio.len(),
                "audio cache hit, skipping synthesis"
            );
            return Ok(SpeechOutput {
                audio: cached.audio,
                content_type: cached.content_type,
                backend,
                chunk_count: 0,
                cache_hit: true,
            });
        }

        // Translate when the source is unknown or differs from the target;
        // the translation service returns the text unchanged otherwise.
        let text = self
            .translation
            .translate(&request.input_text, &request.source_lang, &request.target_lang)
            .await?;

        let segments = chunk(&text, client.max_chunk_len());
        if segments.is_empty() {
            return Err(TtsServiceError::Invalid("input text is empty".to_string()));
        }
        tracing::info!(
            chunk_count = segments.len(),
            text_length = text.len(),
            max_chunk_len = client.max_chunk_len(),
            "text chunked for synthesis"
        );

        // Fan out per-chunk synthesis. Chunks share no context; ordering is
        // restored by index at assembly, not by call completion.
        let calls = segments.iter().enumerate().map(|(index, segment)| {
            let client = Arc::clone(client);
            async move {
                let audio =
                    synthesize_chunk(client.as_ref(), index, segment.trim(), request).await?;
                Ok::<_, TtsServiceError>(SynthesisResult { index, audio })
            }
        });
        let results = futures::future::try_join_all(calls).await?;

        let audio = assemble(&results, output_format).map_err(TtsServiceError::Assembly)?;
        let content_type = output_format.content_type();

        tracing::info!(
            backend = %backend,
            chunk_count = results.len(),
            audio_size_bytes = audio.len(),
            content_type,
            latency_ms = started.elapsed().as_millis() as u64,
            "TTS synthesis completed"
        );

        self.audio_cache
            .insert(
                fingerprint,
                CachedAudio {
                    audio: audio.clone(),
                    content_type,
                },
            )
            .await;

        Ok(SpeechOutput {
            audio,
            content_type,
            backend,
            chunk_count: results.len(),
            cache_hit: false,
        })
    }

    fn client_for(
        &self,
        backend: Backend,
    ) -> Result<&Arc<dyn SynthesisClient>, TtsServiceError> {
        let client = match backend {
            Backend::Indian => self.indian.as_ref(),
            Backend::International => self.international.as_ref(),
        };
        client.ok_or_else(|| {
            TtsServiceError::Configuration(format!("{backend} TTS backend is not configured"))
        })
    }
}

/// The Indian backend always produces WAV; the international backend honors
/// the requested format, defaulting to MP3. Container conversion between the
/// two families is not performed.
fn resolve_output_format(
    backend: Backend,
    request: &TtsRequest,
) -> Result<OutputFormat, TtsServiceError> {
    match backend {
        Backend::Indian => Ok(OutputFormat::Wav),
        Backend::International => match request.output_format {
            Some(OutputFormat::Wav) => Err(TtsServiceError::Invalid(
                "wav output is only available for Indian-language voices; use mp3, ogg or pcm"
                    .to_string(),
            )),
            Some(format) => Ok(format),
            None => Ok(OutputFormat::Mp3),
        },
    }
}

/// One retry against the same backend; a second failure aborts the whole
/// request, reporting the chunk index. There is no cross-provider fallback
/// for synthesis.
async fn synthesize_chunk(
    client: &dyn SynthesisClient,
    index: usize,
    text: &str,
    request: &TtsRequest,
) -> Result<Vec<u8>, TtsServiceError> {
    match client.synthesize(text, request).await {
        Ok(audio) => Ok(audio),
        Err(first) => {
            tracing::warn!(
                chunk_index = index,
                error = %first,
                "chunk synthesis failed, retrying once"
            );
            client.synthesize(text, request).await.map_err(|second| {
                tracing::error!(
                    chunk_index = index,
                    error = %second,
                    "chunk synthesis failed after retry"
                );
                TtsServiceError::Synthesis {
                    chunk_index: index,
                    message: second,
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::Caches;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeSynth {
        calls: AtomicUsize,
        max_chunk_len: usize,
        /// Number of leading calls that fail before succeeding.
        failures: AtomicUsize,
    }

    impl FakeSynth {
        fn new(max_chunk_len: usize) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                max_chunk_len,
                failures: AtomicUsize::new(0),
            }
        }

        fn failing_first(max_chunk_len: usize, failures: usize) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                max_chunk_len,
                failures: AtomicUsize::new(failures),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SynthesisClient for FakeSynth {
        fn max_chunk_len(&self) -> usize {
            self.max_chunk_len
        }

        async fn synthesize(&self, text: &str, _request: &TtsRequest) -> Result<Vec<u8>, String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let remaining = self.failures.load(Ordering::SeqCst);
            if remaining > 0 {
                self.failures.store(remaining - 1, Ordering::SeqCst);
                return Err("simulated provider outage".to_string());
            }
            Ok(format!("[{text}]").into_bytes())
        }
    }

    fn service_with(
        international: Option<Arc<FakeSynth>>,
        caches: &Caches,
    ) -> TtsService {
        let translation = Arc::new(TranslationService::new(
            None,
            None,
            caches.translation.clone(),
        ));
        TtsService::new(
            translation,
            None,
            international.map(|c| c as Arc<dyn SynthesisClient>),
            caches.audio.clone(),
        )
    }

    fn request(text: &str) -> TtsRequest {
        serde_json::from_str::<TtsRequest>(&serde_json::json!({
            "input_text": text,
            "source_lang": "en-US",
            "target_lang": "en-US",
        }).to_string())
        .unwrap()
    }

    #[tokio::test]
    async fn missing_backend_is_a_configuration_error() {
        let caches = Caches::new();
        let service = service_with(None, &caches);
        let err = service.synthesize(&request("hello")).await.unwrap_err();
        assert!(matches!(err, TtsServiceError::Configuration(_)), "{err}");
    }

    #[tokio::test]
    async fn identical_requests_are_served_from_cache() {
        let caches = Caches::new();
        let synth = Arc::new(FakeSynth::new(3000));
        let service = service_with(Some(synth.clone()), &caches);

        let first = service.synthesize(&request("hello world")).await.unwrap();
        assert!(!first.cache_hit);
        assert_eq!(first.audio, b"[hello world]".to_vec());
        assert_eq!(synth.call_count(), 1);

        let second = service.synthesize(&request("hello world")).await.unwrap();
        assert!(second.cache_hit);
        assert_eq!(second.audio, first.audio);
        assert_eq!(second.content_type, first.content_type);
        // no further provider calls
        assert_eq!(synth.call_count(), 1);
    }

    #[tokio::test]
    async fn different_voice_parameters_miss_the_cache() {
        let caches = Caches::new();
        let synth = Arc::new(FakeSynth::new(3000));
        let service = service_with(Some(synth.clone()), &caches);

        service.synthesize(&request("hello")).await.unwrap();
        let mut changed = request("hello");
        changed.pitch = 0.7;
        let output = service.synthesize(&changed).await.unwrap();
        assert!(!output.cache_hit);
        assert_eq!(synth.call_count(), 2);
    }

    #[tokio::test]
    async fn multi_chunk_audio_is_assembled_in_order() {
        let caches = Caches::new();
        let synth = Arc::new(FakeSynth::new(16));
        let service = service_with(Some(synth.clone()), &caches);

        let output = service
            .synthesize(&request("alpha beta gamma delta epsilon"))
            .await
            .unwrap();
        assert!(output.chunk_count > 1);
        let body = String::from_utf8(output.audio).unwrap();
        let alpha = body.find("alpha").unwrap();
        let gamma = body.find("gamma").unwrap();
        let epsilon = body.find("epsilon").unwrap();
        assert!(alpha < gamma && gamma < epsilon, "{body}");
    }

    #[tokio::test]
    async fn transient_chunk_failure_is_retried_once() {
        let caches = Caches::new();
        let synth = Arc::new(FakeSynth::failing_first(3000, 1));
        let service = service_with(Some(synth.clone()), &caches);

        let output = service.synthesize(&request("hello")).await.unwrap();
        assert_eq!(output.audio, b"[hello]".to_vec());
        assert_eq!(synth.call_count(), 2);
    }

    #[tokio::test]
    async fn persistent_chunk_failure_fails_the_request_with_its_index() {
        let caches = Caches::new();
        let synth = Arc::new(FakeSynth::failing_first(3000, usize::MAX));
        let service = service_with(Some(synth.clone()), &caches);

        let err = service.synthesize(&request("hello")).await.unwrap_err();
        match err {
            TtsServiceError::Synthesis { chunk_index, .. } => assert_eq!(chunk_index, 0),
            other => panic!("expected synthesis error, got {other}"),
        }
        // nothing cached on failure
        assert_eq!(caches.audio.entry_count().await, 0);
    }

    #[tokio::test]
    async fn wav_requested_on_international_backend_is_rejected() {
        let caches = Caches::new();
        let synth = Arc::new(FakeSynth::new(3000));
        let service = service_with(Some(synth), &caches);

        let mut req = request("hello");
        req.output_format = Some(OutputFormat::Wav);
        let err = service.synthesize(&req).await.unwrap_err();
        assert!(matches!(err, TtsServiceError::Invalid(_)), "{err}");
    }
}
