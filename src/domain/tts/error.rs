use crate::error::AppError;

/// Failure taxonomy for the synthesis pipeline. Every variant aborts the
/// whole request; no partial audio is ever returned and caches are not
/// updated on failure.
#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("backend not configured: {0}")]
    Configuration(String),
    #[error("translation failed: {0}")]
    Translation(String),
    #[error("synthesis failed for chunk {chunk_index}: {message}")]
    Synthesis { chunk_index: usize, message: String },
    #[error("audio assembly failed: {0}")]
    Assembly(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Configuration(msg) => AppError::Configuration(msg),
            TtsServiceError::Translation(msg) => AppError::Translation(msg),
            TtsServiceError::Synthesis {
                chunk_index,
                message,
            } => AppError::Synthesis {
                chunk_index,
                message,
            },
            TtsServiceError::Assembly(msg) => AppError::Assembly(msg),
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::Other(err) => AppError::Internal(err.to_string()),
        }
    }
}
