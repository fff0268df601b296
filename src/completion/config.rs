//! Configuration for the completion backend

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Base URL of the OpenAI-compatible server
    pub base_url: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum number of output tokens per reply
    pub max_tokens: u32,

    /// Optional request timeout. `None` means the request may hang until
    /// the user resets the conversation; when set, expiry surfaces through
    /// the ordinary failure path.
    pub request_timeout: Option<Duration>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:80".to_string(),
            model: "llama-3.2-3b-instruct".to_string(),
            temperature: 0.7,
            max_tokens: 800,
            request_timeout: None,
        }
    }
}

impl CompletionConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}
