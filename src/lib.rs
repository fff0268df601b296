pub mod chat;
pub mod completion;
pub mod config;
pub mod notify;
pub mod voice;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum WhisperMindError {
    #[error("Completion request error: {0}")]
    CompletionError(String),

    #[error("Completion returned status {0}")]
    CompletionStatus(u16),

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    #[error("Speech recognition is not available")]
    SpeechUnavailable,

    #[error("Speech recognition error: {0}")]
    TranscriptionError(String),

    #[error("Speech backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for WhisperMindError {
    fn from(e: reqwest::Error) -> Self {
        WhisperMindError::CompletionError(e.to_string())
    }
}

impl WhisperMindError {
    /// Get a user-friendly description, suitable for a notification body
    pub fn user_message(&self) -> String {
        match self {
            WhisperMindError::CompletionError(_)
            | WhisperMindError::CompletionStatus(_)
            | WhisperMindError::MalformedResponse(_) => {
                "Failed to get response from the model.".to_string()
            }
            WhisperMindError::SpeechUnavailable => {
                "Speech recognition is not supported on this platform.".to_string()
            }
            WhisperMindError::TranscriptionError(_) => {
                "Failed to recognize speech. Please try again.".to_string()
            }
            WhisperMindError::BackendError(_) => {
                "Speech capture failed. Please try again.".to_string()
            }
            WhisperMindError::ConfigError(_) => {
                "Configuration error. Please check settings.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WhisperMindError>;
