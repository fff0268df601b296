//! Platform seam for speech transcription
//!
//! The backend is an optional platform capability: it exposes session
//! start/stop and pushes [`TranscriptionEvent`]s into the capture
//! controller. Availability must be checked before a session is attempted.

use crate::Result;

/// Settings for a single transcription session
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Recognition locale
    pub locale: String,

    /// Deliver interim (not yet final) segments for live feedback
    pub interim_results: bool,

    /// Keep listening across utterances. The capture state machine models
    /// a single utterance per session, so this stays off.
    pub continuous: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            interim_results: true,
            continuous: false,
        }
    }
}

impl CaptureConfig {
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

/// One decoded piece of the current utterance window
#[derive(Debug, Clone)]
pub struct TranscriptSegment {
    pub text: String,
    /// Final segments are committed and never revisited; non-final ones
    /// replace the pending text
    pub is_final: bool,
}

impl TranscriptSegment {
    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }

    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }
}

/// Everything a transcription session can report
#[derive(Debug, Clone)]
pub enum TranscriptionEvent {
    /// Zero or more finalized segments plus at most one interim segment
    /// for the current utterance window
    Results(Vec<TranscriptSegment>),

    /// The backend detected that the speaker stopped talking
    SpeechEnded,

    /// The session is over; no further events will arrive
    SessionEnded,

    /// The backend failed mid-session
    Errored(String),
}

/// Transcription session control, implemented per platform
pub trait SpeechBackend {
    /// Whether this platform can transcribe speech at all
    fn is_available(&self) -> bool;

    /// Open a transcription session; events are delivered to the capture
    /// controller out of band
    fn start(&mut self, config: &CaptureConfig) -> Result<()>;

    /// Ask the session to wind down. The backend still delivers any
    /// trailing results and a final [`TranscriptionEvent::SessionEnded`].
    fn stop(&mut self);
}

/// Stand-in for platforms without speech recognition
pub struct NoSpeechBackend;

impl SpeechBackend for NoSpeechBackend {
    fn is_available(&self) -> bool {
        false
    }

    fn start(&mut self, _config: &CaptureConfig) -> Result<()> {
        Err(crate::WhisperMindError::SpeechUnavailable)
    }

    fn stop(&mut self) {}
}
