//! Async controller driving request/response exchange with the completion
//! backend
//!
//! Wraps the conversation store behind a lock and performs the single
//! suspension point of the core: the completion call. The lock is never
//! held across the await; the store's generation tagging makes a reset
//! during the call safe.

use super::store::{ConversationSnapshot, ConversationStore, Resolution};
use crate::completion::CompletionClient;
use crate::notify::{Notification, Notify};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, warn};

/// What became of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Dropped without side effects: empty text, or a request already in
    /// flight
    Rejected,
    /// Exchange succeeded; the assistant reply is in the history
    Answered,
    /// The completion request failed; the user message stands unanswered
    Failed,
    /// The conversation was reset mid-flight and the result was discarded
    Discarded,
}

pub struct ChatController<C> {
    store: Arc<RwLock<ConversationStore>>,
    client: Arc<C>,
    notifier: Arc<dyn Notify>,
}

impl<C> Clone for ChatController<C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            client: Arc::clone(&self.client),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<C: CompletionClient> ChatController<C> {
    pub fn new(client: C, notifier: Arc<dyn Notify>) -> Self {
        Self {
            store: Arc::new(RwLock::new(ConversationStore::new())),
            client: Arc::new(client),
            notifier,
        }
    }

    /// Submit user text and drive the exchange to completion.
    ///
    /// A rejected submission (empty text, request already in flight) is a
    /// silent no-op per the single-flight invariant. A failed exchange
    /// emits exactly one error notification; a stale result is discarded
    /// without one.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let Some((ticket, history)) = self.store.write().begin_submit(text) else {
            debug!("Submission rejected");
            return SubmitOutcome::Rejected;
        };

        let reply = self.client.complete(&history).await;
        if let Err(e) = &reply {
            warn!("Completion request failed: {}", e);
        }

        let user_message = reply.as_ref().err().map(|e| e.user_message());
        match self.store.write().resolve(ticket, reply) {
            Resolution::Answered => SubmitOutcome::Answered,
            Resolution::Failed => {
                self.notifier.notify(Notification::error(
                    "Error",
                    user_message.unwrap_or_else(|| "Completion failed.".to_string()),
                ));
                SubmitOutcome::Failed
            }
            Resolution::Stale => {
                debug!("Discarding completion result for a reset conversation");
                SubmitOutcome::Discarded
            }
        }
    }

    /// Start a new chat: clear the history and force idle. Safe to call
    /// while a request is in flight; its eventual result is discarded.
    pub fn reset(&self) {
        self.store.write().reset();
    }

    pub fn snapshot(&self) -> ConversationSnapshot {
        self.store.read().snapshot()
    }
}
