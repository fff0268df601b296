//! Conversation store: ordered message history plus request status
//!
//! The store is plain owned state with no interior mutability; all
//! concurrency concerns live in the controller that wraps it. At most one
//! completion request is ever in flight, and every outstanding request is
//! tagged with the conversation generation at dispatch time so a result
//! arriving after a reset can be recognized as stale and discarded.

use super::types::{Message, Role};
use crate::Result;

/// Whether a completion request is currently outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    AwaitingReply,
}

/// Tag handed out by [`ConversationStore::begin_submit`], carrying the
/// conversation generation at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
}

/// How a completed request was applied to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The assistant reply was appended and the store is idle again
    Answered,
    /// The request failed; the user message stands unanswered
    Failed,
    /// The conversation was reset while the request was in flight; the
    /// result was discarded without touching state
    Stale,
}

/// Read-only view of the conversation for the presentation layer
#[derive(Debug, Clone)]
pub struct ConversationSnapshot {
    pub messages: Vec<Message>,
    pub status: Status,
}

pub struct ConversationStore {
    messages: Vec<Message>,
    status: Status,
    generation: u64,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            status: Status::Idle,
            generation: 0,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn snapshot(&self) -> ConversationSnapshot {
        ConversationSnapshot {
            messages: self.messages.clone(),
            status: self.status,
        }
    }

    /// Accept a user submission, or reject it without touching state.
    ///
    /// Rejection cases: text that is empty after trimming, or a request
    /// already in flight (submissions are dropped, not queued). On
    /// acceptance the user message is appended, the status flips to
    /// [`Status::AwaitingReply`], and the caller receives a ticket plus the
    /// full history to send to the completion backend.
    pub fn begin_submit(&mut self, text: &str) -> Option<(SubmitTicket, Vec<Message>)> {
        let text = text.trim();
        if text.is_empty() || self.status == Status::AwaitingReply {
            return None;
        }

        self.messages.push(Message::user(text));
        self.status = Status::AwaitingReply;

        let ticket = SubmitTicket {
            generation: self.generation,
        };
        Some((ticket, self.messages.clone()))
    }

    /// Apply the outcome of a completion request.
    ///
    /// If the conversation was reset after the ticket was issued the result
    /// is stale and ignored entirely, success and failure alike.
    pub fn resolve(&mut self, ticket: SubmitTicket, reply: Result<String>) -> Resolution {
        if ticket.generation != self.generation {
            return Resolution::Stale;
        }

        self.status = Status::Idle;
        match reply {
            Ok(content) => {
                self.messages.push(Message::new(Role::Assistant, content));
                Resolution::Answered
            }
            Err(_) => Resolution::Failed,
        }
    }

    /// Clear the conversation and force idle, valid at any time including
    /// while a request is in flight. Bumping the generation invalidates any
    /// outstanding ticket.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.status = Status::Idle;
        self.generation += 1;
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}
