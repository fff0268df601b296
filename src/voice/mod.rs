//! Voice capture: speech-transcription sessions turned into committed
//! user messages
//!
//! The state machine lives in [`capture`], the utterance accumulation in
//! [`session`], and the platform seam in [`backend`]. The controller wires
//! them to the conversation store so a finished utterance is submitted
//! automatically when the speaker stops talking.

pub mod backend;
pub mod capture;
pub mod controller;
pub mod session;

pub use backend::{
    CaptureConfig, NoSpeechBackend, SpeechBackend, TranscriptSegment, TranscriptionEvent,
};
pub use capture::{CapturePhase, CaptureUpdate, VoiceCapture};
pub use controller::VoiceController;
pub use session::VoiceSession;
