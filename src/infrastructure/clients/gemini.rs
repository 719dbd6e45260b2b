use super::TranslationClient;
use crate::domain::tts::language::language_name;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini as the general-purpose fallback translator. Prompted with
/// human-readable language names; the model is asked for the bare
/// translation and nothing else.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, api_key: String) -> Self {
        Self {
            http,
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[derive(Serialize)]
struct GenerateBody {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateReply {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ReplyContent,
}

#[derive(Deserialize)]
struct ReplyContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[async_trait]
impl TranslationClient for GeminiClient {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, String> {
        let prompt = format!(
            "Translate this text from {} to {}. Just the translated output:\n{}",
            language_name(source_lang),
            language_name(target_lang),
            text
        );

        let body = GenerateBody {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let url = format!(
            "{BASE_URL}/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Gemini request failed: {e}"))?;

        if !response.status().is_success() {
            return Err(format!("Gemini returned {}", response.status()));
        }

        let reply: GenerateReply = response
            .json()
            .await
            .map_err(|e| format!("Gemini response invalid: {e}"))?;

        reply
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text.trim().to_string())
            .ok_or_else(|| "Gemini returned no candidates".to_string())
    }
}
