use super::{SynthesisClient, TranslationClient};
use crate::domain::tts::TtsRequest;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Bulbul v2 accepts 500 characters per request; 250 is a safe limit that
/// avoids failures on long sentences.
const TTS_MAX_CHARS: usize = 250;

const DEFAULT_BASE_URL: &str = "https://api.sarvam.ai";

/// Sarvam AI client: Indian-language synthesis (bulbul:v2) and primary
/// translation (mayura:v1) over the same authenticated HTTP surface.
pub struct SarvamClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SarvamClient {
    pub fn new(http: reqwest::Client, api_key: String) -> Self {
        Self {
            http,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Serialize)]
struct TranslateBody<'a> {
    input: &'a str,
    source_language_code: &'a str,
    target_language_code: &'a str,
    model: &'a str,
    mode: &'a str,
    enable_preprocessing: bool,
}

#[derive(Deserialize)]
struct TranslateReply {
    translated_text: String,
}

#[derive(Serialize)]
struct SpeechBody<'a> {
    text: &'a str,
    model: &'a str,
    speaker: String,
    pitch: f32,
    target_language_code: &'a str,
    pace: f32,
    loudness: f32,
    speech_sample_rate: u32,
    enable_preprocessing: bool,
}

#[derive(Deserialize)]
struct SpeechReply {
    audios: Vec<String>,
}

#[async_trait]
impl TranslationClient for SarvamClient {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, String> {
        let body = TranslateBody {
            input: text,
            source_language_code: source_lang,
            target_language_code: target_lang,
            model: "mayura:v1",
            mode: "modern-colloquial",
            enable_preprocessing: true,
        };

        let response = self
            .http
            .post(format!("{}/translate", self.base_url))
            .header("api-subscription-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Sarvam translate request failed: {e}"))?;

        if !response.status().is_success() {
            return Err(format!("Sarvam translate returned {}", response.status()));
        }

        let reply: TranslateReply = response
            .json()
            .await
            .map_err(|e| format!("Sarvam translate response invalid: {e}"))?;
        Ok(reply.translated_text)
    }
}

#[async_trait]
impl SynthesisClient for SarvamClient {
    fn max_chunk_len(&self) -> usize {
        TTS_MAX_CHARS
    }

    async fn synthesize(&self, text: &str, request: &TtsRequest) -> Result<Vec<u8>, String> {
        tracing::info!(
            target_lang = %request.target_lang,
            speaker = %request.speaker,
            sample_rate = request.speech_sample_rate,
            text_length = text.len(),
            "Calling Sarvam text-to-speech"
        );

        let body = SpeechBody {
            text,
            model: "bulbul:v2",
            speaker: request.speaker.to_lowercase(),
            pitch: request.pitch,
            target_language_code: &request.target_lang,
            pace: request.pace,
            loudness: request.loudness,
            speech_sample_rate: request.speech_sample_rate,
            enable_preprocessing: request.enable_preprocessing,
        };

        let response = self
            .http
            .post(format!("{}/text-to-speech", self.base_url))
            .header("api-subscription-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Sarvam TTS request failed: {e}"))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(
                status = %status,
                target_lang = %request.target_lang,
                "Sarvam text-to-speech failed"
            );
            return Err(format!("Sarvam TTS returned {status}"));
        }

        let reply: SpeechReply = response
            .json()
            .await
            .map_err(|e| format!("Sarvam TTS response invalid: {e}"))?;

        // The response carries one WAV payload split into base64 fragments.
        let audio = BASE64
            .decode(reply.audios.concat())
            .map_err(|e| format!("Sarvam audio payload is not valid base64: {e}"))?;

        tracing::debug!(audio_size = audio.len(), "Sarvam audio received");
        Ok(audio)
    }
}
