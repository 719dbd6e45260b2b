pub mod gemini;
pub mod polly;
pub mod sarvam;

pub use gemini::GeminiClient;
pub use polly::PollyTtsClient;
pub use sarvam::SarvamClient;

use crate::domain::tts::TtsRequest;
use async_trait::async_trait;

/// Remote translation capability.
/// Implementations own the provider wire format; chunking, caching and
/// fallback ordering live in the domain layer so the pipeline can be tested
/// with deterministic fakes.
#[async_trait]
pub trait TranslationClient: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, String>;
}

/// Remote speech synthesis capability for a single chunk of text.
/// Calls are stateless; chunks share no context with each other.
#[async_trait]
pub trait SynthesisClient: Send + Sync {
    /// Provider character limit per request; the orchestrator chunks to this.
    fn max_chunk_len(&self) -> usize;

    /// Synthesize one chunk, returning the provider's native audio bytes.
    async fn synthesize(&self, text: &str, request: &TtsRequest) -> Result<Vec<u8>, String>;
}
