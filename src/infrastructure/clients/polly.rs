use super::SynthesisClient;
use crate::domain::tts::language::default_polly_voice;
use crate::domain::tts::{OutputFormat, TtsRequest};
use async_trait::async_trait;
use aws_sdk_polly::types::{Engine, OutputFormat as PollyOutputFormat, VoiceId};
use aws_sdk_polly::Client as PollyClient;
use std::sync::Arc;

/// AWS Polly accepts up to 3000 characters of rendered text per request.
const MAX_CHUNK_LEN: usize = 3000;

/// International TTS backend. Voice defaults are chosen per target language;
/// the engine is neural unless the caller asks for standard.
pub struct PollyTtsClient {
    client: Arc<PollyClient>,
}

impl PollyTtsClient {
    pub fn new(client: Arc<PollyClient>) -> Self {
        Self { client }
    }

    fn engine_for(request: &TtsRequest) -> Engine {
        match request.engine.as_deref() {
            Some("standard") => Engine::Standard,
            _ => Engine::Neural,
        }
    }

    fn output_format_for(request: &TtsRequest) -> PollyOutputFormat {
        match request.output_format {
            Some(OutputFormat::Ogg) => PollyOutputFormat::OggVorbis,
            Some(OutputFormat::Pcm) => PollyOutputFormat::Pcm,
            _ => PollyOutputFormat::Mp3,
        }
    }
}

#[async_trait]
impl SynthesisClient for PollyTtsClient {
    fn max_chunk_len(&self) -> usize {
        MAX_CHUNK_LEN
    }

    async fn synthesize(&self, text: &str, request: &TtsRequest) -> Result<Vec<u8>, String> {
        let voice_name = request
            .voice
            .clone()
            .unwrap_or_else(|| default_polly_voice(&request.target_lang).to_string());
        let voice_id = VoiceId::from(voice_name.as_str());
        let engine = Self::engine_for(request);
        let output_format = Self::output_format_for(request);

        tracing::info!(
            target_lang = %request.target_lang,
            voice = %voice_name,
            engine = ?engine,
            output_format = ?output_format,
            text_length = text.len(),
            "Calling AWS Polly synthesize_speech"
        );

        let result = self
            .client
            .synthesize_speech()
            .text(text)
            .voice_id(voice_id)
            .output_format(output_format)
            .engine(engine)
            .sample_rate(request.speech_sample_rate.to_string())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = ?e,
                    voice = %voice_name,
                    text_length = text.len(),
                    "AWS Polly synthesize_speech failed"
                );
                format!("AWS Polly error: {e:?}")
            })?;

        let audio_stream = result
            .audio_stream
            .collect()
            .await
            .map_err(|e| format!("Failed to read Polly audio stream: {e}"))?;

        let audio = audio_stream.into_bytes().to_vec();
        tracing::debug!(audio_size = audio.len(), "Polly audio stream collected");
        Ok(audio)
    }
}
