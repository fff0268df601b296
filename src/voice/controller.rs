//! Voice capture controller: backend lifecycle, notifications, and
//! auto-submission of committed utterances

use super::backend::{CaptureConfig, SpeechBackend, TranscriptionEvent};
use super::capture::{CapturePhase, CaptureUpdate, VoiceCapture};
use crate::chat::ChatController;
use crate::completion::CompletionClient;
use crate::notify::{Notification, Notify};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct VoiceController<B, C> {
    backend: B,
    capture: VoiceCapture,
    config: CaptureConfig,
    chat: ChatController<C>,
    notifier: Arc<dyn Notify>,
}

impl<B: SpeechBackend, C: CompletionClient> VoiceController<B, C> {
    pub fn new(
        backend: B,
        config: CaptureConfig,
        chat: ChatController<C>,
        notifier: Arc<dyn Notify>,
    ) -> Self {
        Self {
            backend,
            capture: VoiceCapture::new(),
            config,
            chat,
            notifier,
        }
    }

    pub fn phase(&self) -> CapturePhase {
        self.capture.phase()
    }

    /// The text to show in the input field while listening
    pub fn live_input(&self) -> String {
        self.capture.live_text()
    }

    /// Start listening. Checks the platform capability first; when speech
    /// recognition is unavailable this warns once and stays idle.
    pub fn start(&mut self) {
        if !self.backend.is_available() {
            self.notifier.notify(Notification::warning(
                "Speech Recognition Not Available",
                "Speech recognition is not supported on this platform.",
            ));
            return;
        }

        if !self.capture.begin() {
            debug!("Capture session already active");
            return;
        }

        if let Err(e) = self.backend.start(&self.config) {
            warn!("Failed to start transcription session: {}", e);
            // Roll the machine back so a retry is possible
            let _ = self
                .capture
                .on_event(TranscriptionEvent::Errored(e.to_string()));
            self.notifier
                .notify(Notification::error("Speech Recognition Error", e.user_message()));
            return;
        }

        self.notifier.notify(Notification::info(
            "Listening...",
            "Speak now. Speech will be sent automatically when you pause.",
        ));
    }

    /// User-initiated stop; a no-op while idle
    pub fn stop(&mut self) {
        if self.capture.request_stop() {
            self.backend.stop();
        }
    }

    /// Flip between listening and stopped, as a mic button does
    pub fn toggle(&mut self) {
        match self.capture.phase() {
            CapturePhase::Idle => self.start(),
            CapturePhase::Listening => self.stop(),
            CapturePhase::Stopping => {}
        }
    }

    /// Drive one transcription event through the capture machine, stopping
    /// the backend on end-of-speech and submitting the committed utterance
    /// when the session finishes.
    pub async fn handle_event(&mut self, event: TranscriptionEvent) {
        match self.capture.on_event(event) {
            Some(CaptureUpdate::LiveText(text)) => {
                debug!("Live input: {:?}", text);
            }
            Some(CaptureUpdate::StopBackend) => {
                self.backend.stop();
            }
            Some(CaptureUpdate::Finished { utterance }) => {
                self.notifier.notify(Notification::info(
                    "Recording stopped",
                    "Processing your message...",
                ));
                if let Some(text) = utterance {
                    self.chat.submit(&text).await;
                }
            }
            Some(CaptureUpdate::Aborted { error }) => {
                warn!("Transcription session failed: {}", error);
                self.notifier.notify(Notification::error(
                    "Speech Recognition Error",
                    "Failed to recognize speech. Please try again.",
                ));
            }
            None => {}
        }
    }
}
