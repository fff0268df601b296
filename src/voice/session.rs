//! Utterance accumulation for one microphone activation
//!
//! `committed` holds finalized transcription only; `pending` is the current
//! interim segment and is replaced wholesale on every event. Only committed
//! text is ever submitted; an unconfirmed fragment never reaches the
//! completion backend.

#[derive(Debug, Clone, Default)]
pub struct VoiceSession {
    committed: String,
    pending: String,
}

impl VoiceSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized segment; it is never revisited
    pub fn push_final(&mut self, text: &str) {
        self.committed.push_str(text);
        self.committed.push(' ');
    }

    /// Replace the interim text for the current utterance window
    pub fn set_interim(&mut self, text: &str) {
        self.pending.clear();
        self.pending.push_str(text);
    }

    /// The externally observable input text: committed plus pending,
    /// trimmed. Recomputed on every event for live feedback.
    pub fn live_text(&self) -> String {
        format!("{} {}", self.committed.trim_end(), self.pending)
            .trim()
            .to_string()
    }

    /// Take the trimmed committed text, discarding any pending interim.
    /// Returns `None` when nothing was finalized. Leaves the session empty.
    pub fn take_utterance(&mut self) -> Option<String> {
        let utterance = self.committed.trim().to_string();
        self.clear();
        if utterance.is_empty() {
            None
        } else {
            Some(utterance)
        }
    }

    pub fn clear(&mut self) {
        self.committed.clear();
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.pending.is_empty()
    }
}
