//! Fire-and-forget notifications for transient, user-visible status events
//!
//! The core raises notifications (errors, recording state changes) through
//! the [`Notify`] trait and never depends on how they are rendered. A
//! headless run logs them; a UI thread polls a bounded channel.

use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, description)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, description)
    }
}

/// One-way signal channel consumed by the core. No return value, no effect
/// on core state.
pub trait Notify: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier that writes notifications to the tracing log
pub struct LogNotifier;

impl Notify for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info | Severity::Success => {
                info!("{}: {}", notification.title, notification.description)
            }
            Severity::Warning => {
                warn!("{}: {}", notification.title, notification.description)
            }
            Severity::Error => {
                error!("{}: {}", notification.title, notification.description)
            }
        }
    }
}

/// Notifier that feeds a bounded channel for a presentation thread to poll.
///
/// Delivery is best-effort: if the channel is full or the receiver is gone,
/// the notification is dropped rather than blocking the core.
pub struct ChannelNotifier {
    tx: Sender<Notification>,
}

impl ChannelNotifier {
    pub fn new(capacity: usize) -> (Self, Receiver<Notification>) {
        let (tx, rx) = bounded(capacity);
        (Self { tx }, rx)
    }
}

impl Notify for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if self.tx.try_send(notification).is_err() {
            debug!("Notification dropped: channel full or disconnected");
        }
    }
}
