//! Completion backend interface
//!
//! The conversation controller talks to the model through the
//! [`CompletionClient`] trait: one call per exchange, given the full ordered
//! history, returning the next assistant reply or a failure. The production
//! implementation is [`HttpCompletionClient`]; tests substitute mocks.

pub mod config;
pub mod http;

use crate::chat::Message;
use crate::Result;
use std::future::Future;

pub use config::CompletionConfig;
pub use http::HttpCompletionClient;

pub trait CompletionClient: Send + Sync {
    /// Request the next assistant reply for the given history.
    ///
    /// Any transport error, non-success status, or malformed body is
    /// reported as a single failure; callers never see partial responses.
    fn complete(&self, messages: &[Message]) -> impl Future<Output = Result<String>> + Send;
}
