pub mod assembler;
pub mod chunker;
pub mod error;
pub mod language;
pub mod service;

pub use error::TtsServiceError;
pub use language::{select_backend, Backend};
pub use service::{SpeechOutput, TtsService};

use serde::{Deserialize, Serialize};

/// Request body for POST /tts. Defaults mirror the deployed API contract:
/// auto-detected source, Hindi target, the abhilash speaker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsRequest {
    pub input_text: String,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    #[serde(default = "default_speaker")]
    pub speaker: String,
    /// Explicit international voice; overrides the per-language default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(default)]
    pub pitch: f32,
    #[serde(default = "default_unit")]
    pub pace: f32,
    #[serde(default = "default_unit")]
    pub loudness: f32,
    #[serde(default = "default_sample_rate")]
    pub speech_sample_rate: u32,
    #[serde(default)]
    pub enable_preprocessing: bool,
    /// Polly engine ("neural" unless "standard" is requested).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
}

fn default_source_lang() -> String {
    "auto".to_string()
}

fn default_target_lang() -> String {
    "hi-IN".to_string()
}

fn default_speaker() -> String {
    "abhilash".to_string()
}

fn default_unit() -> f32 {
    1.0
}

fn default_sample_rate() -> u32 {
    24000
}

impl TtsRequest {
    /// Full synthesis fingerprint: the audio cache key. Two requests share an
    /// entry only when every voice parameter and the text match.
    pub fn fingerprint(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
            self.target_lang,
            self.source_lang,
            self.speaker,
            self.voice.as_deref().unwrap_or("-"),
            self.pitch,
            self.pace,
            self.loudness,
            self.speech_sample_rate,
            self.enable_preprocessing,
            self.engine.as_deref().unwrap_or("-"),
            self.output_format.map(|f| f.as_str()).unwrap_or("-"),
            self.input_text,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Wav,
    Mp3,
    Ogg,
    Pcm,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Wav => "wav",
            OutputFormat::Mp3 => "mp3",
            OutputFormat::Ogg => "ogg",
            OutputFormat::Pcm => "pcm",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Wav => "audio/wav",
            OutputFormat::Mp3 => "audio/mpeg",
            OutputFormat::Ogg => "audio/ogg",
            OutputFormat::Pcm => "audio/pcm",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn request_defaults_match_api_contract() {
        let request: TtsRequest =
            serde_json::from_str(r#"{"input_text": "नमस्ते"}"#).unwrap();
        assert_eq!(request.source_lang, "auto");
        assert_eq!(request.target_lang, "hi-IN");
        assert_eq!(request.speaker, "abhilash");
        assert_eq!(request.pace, 1.0);
        assert_eq!(request.speech_sample_rate, 24000);
        assert!(!request.enable_preprocessing);
        assert!(request.output_format.is_none());
    }

    #[test]
    fn fingerprint_varies_with_voice_parameters() {
        let base: TtsRequest = serde_json::from_str(r#"{"input_text": "hello"}"#).unwrap();
        let mut other = base.clone();
        other.pitch = 0.5;
        assert_ne!(base.fingerprint(), other.fingerprint());

        let mut same = base.clone();
        same.input_text = "hello".to_string();
        assert_eq!(base.fingerprint(), same.fingerprint());
    }

    #[test]
    fn output_format_parses_lowercase_names() {
        let format: OutputFormat = serde_json::from_str(r#""ogg""#).unwrap();
        assert_eq!(format, OutputFormat::Ogg);
        assert_eq!(format.content_type(), "audio/ogg");
    }
}
