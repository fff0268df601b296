//! Capture state machine for a speech-transcription session
//!
//! Phases: `Idle` → `Listening` on begin, `Listening` → `Stopping` on a
//! user stop or backend end-of-speech (both converge on the same
//! termination handling), back to `Idle` when the session ends or errors.
//! The machine is pure: it consumes [`TranscriptionEvent`]s and emits
//! [`CaptureUpdate`]s for the controller to act on.

use super::backend::TranscriptionEvent;
use super::session::VoiceSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturePhase {
    #[default]
    Idle,
    Listening,
    Stopping,
}

/// Outputs of the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureUpdate {
    /// The live input text changed
    LiveText(String),

    /// End of speech was detected; the backend session should be stopped
    StopBackend,

    /// The session ended. `utterance` is the committed text to submit, if
    /// any was finalized; interim text is discarded.
    Finished { utterance: Option<String> },

    /// The backend failed mid-session; nothing is submitted
    Aborted { error: String },
}

#[derive(Debug, Default)]
pub struct VoiceCapture {
    phase: CapturePhase,
    session: VoiceSession,
}

impl VoiceCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    pub fn live_text(&self) -> String {
        self.session.live_text()
    }

    /// Enter `Listening` with a fresh session. Returns `false` if a session
    /// is already active.
    pub fn begin(&mut self) -> bool {
        if self.phase != CapturePhase::Idle {
            return false;
        }
        self.session.clear();
        self.phase = CapturePhase::Listening;
        true
    }

    /// User-initiated stop. A no-op unless currently `Listening`.
    pub fn request_stop(&mut self) -> bool {
        if self.phase != CapturePhase::Listening {
            return false;
        }
        self.phase = CapturePhase::Stopping;
        true
    }

    /// Feed one transcription event through the machine.
    ///
    /// Events arriving while `Idle` are stray (a session already torn down)
    /// and ignored.
    pub fn on_event(&mut self, event: TranscriptionEvent) -> Option<CaptureUpdate> {
        if self.phase == CapturePhase::Idle {
            return None;
        }

        match event {
            TranscriptionEvent::Results(segments) => {
                // Finalized segments can trail a stop request, so results
                // are folded in during Stopping as well
                let mut interim: Option<String> = None;
                for segment in segments {
                    if segment.is_final {
                        self.session.push_final(&segment.text);
                    } else {
                        interim = Some(segment.text);
                    }
                }
                self.session.set_interim(interim.as_deref().unwrap_or(""));
                Some(CaptureUpdate::LiveText(self.session.live_text()))
            }
            TranscriptionEvent::SpeechEnded => {
                if self.request_stop() {
                    Some(CaptureUpdate::StopBackend)
                } else {
                    None
                }
            }
            TranscriptionEvent::SessionEnded => {
                self.phase = CapturePhase::Idle;
                Some(CaptureUpdate::Finished {
                    utterance: self.session.take_utterance(),
                })
            }
            TranscriptionEvent::Errored(error) => {
                self.phase = CapturePhase::Idle;
                self.session.clear();
                Some(CaptureUpdate::Aborted { error })
            }
        }
    }
}
