//! End-to-end tests for the conversation and voice-input core
//!
//! Exercises the public surface the way a presentation layer would: typed
//! submissions, mic toggling, transcription events, and reset, observing
//! state through snapshots and notifications through the channel notifier.

use std::sync::Arc;
use whispermind::chat::{ChatController, Message, Role, Status, SubmitOutcome};
use whispermind::completion::CompletionClient;
use whispermind::notify::{ChannelNotifier, Notification, Notify, Severity};
use whispermind::voice::{
    CaptureConfig, CapturePhase, NoSpeechBackend, SpeechBackend, TranscriptSegment,
    TranscriptionEvent, VoiceController,
};
use whispermind::{Result, WhisperMindError};

/// Scripted completion client: answers from a queue, failing once the
/// queue is empty
struct ScriptedClient {
    replies: parking_lot::Mutex<Vec<Result<String>>>,
}

impl ScriptedClient {
    fn new(replies: Vec<Result<String>>) -> Self {
        Self {
            replies: parking_lot::Mutex::new(replies),
        }
    }

    fn answering(reply: &str) -> Self {
        Self::new(vec![Ok(reply.to_string())])
    }

    fn failing() -> Self {
        Self::new(vec![])
    }
}

impl CompletionClient for ScriptedClient {
    async fn complete(&self, _messages: &[Message]) -> Result<String> {
        let mut replies = self.replies.lock();
        if replies.is_empty() {
            Err(WhisperMindError::CompletionError("network error".into()))
        } else {
            replies.remove(0)
        }
    }
}

/// Backend that is always available and does nothing on start/stop; the
/// test script delivers events directly
struct ScriptedBackend;

impl SpeechBackend for ScriptedBackend {
    fn is_available(&self) -> bool {
        true
    }

    fn start(&mut self, _config: &CaptureConfig) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self) {}
}

fn harness(
    client: ScriptedClient,
) -> (
    ChatController<ScriptedClient>,
    crossbeam_channel::Receiver<Notification>,
) {
    let (notifier, rx) = ChannelNotifier::new(32);
    (ChatController::new(client, Arc::new(notifier)), rx)
}

#[tokio::test]
async fn typed_exchange_round_trip() {
    let (chat, rx) = harness(ScriptedClient::answering("4"));

    assert_eq!(chat.submit("2+2?").await, SubmitOutcome::Answered);

    let snapshot = chat.snapshot();
    assert_eq!(snapshot.status, Status::Idle);
    assert_eq!(snapshot.messages.len(), 2);
    assert_eq!(
        (snapshot.messages[0].role, snapshot.messages[0].content.as_str()),
        (Role::User, "2+2?")
    );
    assert_eq!(
        (snapshot.messages[1].role, snapshot.messages[1].content.as_str()),
        (Role::Assistant, "4")
    );
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn failed_exchange_leaves_unanswered_turn() {
    let (chat, rx) = harness(ScriptedClient::failing());

    assert_eq!(chat.submit("hi").await, SubmitOutcome::Failed);

    let snapshot = chat.snapshot();
    assert_eq!(snapshot.status, Status::Idle);
    assert_eq!(snapshot.messages.len(), 1);
    assert_eq!(snapshot.messages[0].content, "hi");

    let errors: Vec<_> = rx.try_iter().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].severity, Severity::Error);
}

#[tokio::test]
async fn user_can_retry_after_failure() {
    let (chat, _rx) = harness(ScriptedClient::new(vec![
        Err(WhisperMindError::CompletionStatus(503)),
        Ok("recovered".to_string()),
    ]));

    assert_eq!(chat.submit("hello").await, SubmitOutcome::Failed);
    assert_eq!(chat.submit("hello again").await, SubmitOutcome::Answered);

    let snapshot = chat.snapshot();
    assert_eq!(snapshot.messages.len(), 3);
    assert_eq!(snapshot.messages[2].content, "recovered");
}

#[tokio::test]
async fn reset_starts_an_empty_conversation() {
    let (chat, _rx) = harness(ScriptedClient::answering("sure"));

    chat.submit("hello").await;
    chat.reset();

    let snapshot = chat.snapshot();
    assert!(snapshot.messages.is_empty());
    assert_eq!(snapshot.status, Status::Idle);
}

#[tokio::test]
async fn spoken_message_flows_into_the_conversation() {
    let (notifier, rx) = ChannelNotifier::new(32);
    let notifier: Arc<dyn Notify> = Arc::new(notifier);
    let chat = ChatController::new(
        ScriptedClient::answering("Hello to you too"),
        Arc::clone(&notifier),
    );
    let mut voice = VoiceController::new(
        ScriptedBackend,
        CaptureConfig::default(),
        chat.clone(),
        notifier,
    );

    voice.toggle();
    assert_eq!(voice.phase(), CapturePhase::Listening);
    assert_eq!(rx.try_recv().unwrap().title, "Listening...");

    voice
        .handle_event(TranscriptionEvent::Results(vec![
            TranscriptSegment::finalized("hello"),
            TranscriptSegment::interim("wo"),
        ]))
        .await;
    assert_eq!(voice.live_input(), "hello wo");

    voice
        .handle_event(TranscriptionEvent::Results(vec![
            TranscriptSegment::finalized("world"),
        ]))
        .await;
    voice.handle_event(TranscriptionEvent::SpeechEnded).await;
    voice.handle_event(TranscriptionEvent::SessionEnded).await;

    assert_eq!(voice.phase(), CapturePhase::Idle);
    assert_eq!(rx.try_recv().unwrap().title, "Recording stopped");

    let snapshot = chat.snapshot();
    assert_eq!(snapshot.messages.len(), 2);
    assert_eq!(snapshot.messages[0].content, "hello world");
    assert_eq!(snapshot.messages[1].content, "Hello to you too");
}

#[tokio::test]
async fn mic_without_speech_support_warns_and_stays_idle() {
    let (notifier, rx) = ChannelNotifier::new(32);
    let notifier: Arc<dyn Notify> = Arc::new(notifier);
    let chat = ChatController::new(ScriptedClient::failing(), Arc::clone(&notifier));
    let mut voice = VoiceController::new(
        NoSpeechBackend,
        CaptureConfig::default(),
        chat.clone(),
        notifier,
    );

    voice.toggle();

    assert_eq!(voice.phase(), CapturePhase::Idle);
    let notifications: Vec<_> = rx.try_iter().collect();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].severity, Severity::Warning);
    assert!(chat.snapshot().messages.is_empty());
}

#[tokio::test]
async fn transcription_error_reaches_the_user_without_a_submission() {
    let (notifier, rx) = ChannelNotifier::new(32);
    let notifier: Arc<dyn Notify> = Arc::new(notifier);
    let chat = ChatController::new(ScriptedClient::answering("unused"), Arc::clone(&notifier));
    let mut voice = VoiceController::new(
        ScriptedBackend,
        CaptureConfig::default(),
        chat.clone(),
        notifier,
    );

    voice.start();
    let _ = rx.try_recv();

    voice
        .handle_event(TranscriptionEvent::Results(vec![
            TranscriptSegment::finalized("half an utter"),
        ]))
        .await;
    voice
        .handle_event(TranscriptionEvent::Errored("network".to_string()))
        .await;

    assert_eq!(voice.phase(), CapturePhase::Idle);
    assert_eq!(rx.try_recv().unwrap().severity, Severity::Error);
    assert!(chat.snapshot().messages.is_empty());
    assert_eq!(chat.snapshot().status, Status::Idle);
}
