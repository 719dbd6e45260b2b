pub mod translation;
pub mod tts;
