//! Application configuration
//!
//! Aggregates the per-component settings with sensible defaults for a
//! local completion server. The binary honors `WHISPERMIND_URL` and
//! `WHISPERMIND_MODEL` environment overrides.

use crate::completion::CompletionConfig;
use crate::voice::CaptureConfig;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Completion backend settings
    pub completion: CompletionConfig,

    /// Voice capture settings
    pub capture: CaptureConfig,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("WHISPERMIND_URL") {
            config.completion.base_url = url;
        }
        if let Ok(model) = std::env::var("WHISPERMIND_MODEL") {
            config.completion.model = model;
        }
        config
    }

    pub fn with_completion(mut self, completion: CompletionConfig) -> Self {
        self.completion = completion;
        self
    }

    pub fn with_capture(mut self, capture: CaptureConfig) -> Self {
        self.capture = capture;
        self
    }
}
