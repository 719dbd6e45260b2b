pub mod cache;
pub mod catalog;
pub mod health;
pub mod tts;
