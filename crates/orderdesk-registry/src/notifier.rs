//! The outbound notification capability.
//!
//! A [`Notifier`] delivers one rendered message with a [`Color`] to a
//! human-facing channel. The registry treats delivery as best-effort: a
//! failing notifier is logged and otherwise ignored.

use std::sync::{Mutex, PoisonError};

use orderdesk_types::{Color, Result};

use crate::message::Notification;

/// Delivers rendered notifications.
pub trait Notifier: Send + Sync {
    /// Post `message` with `color`.
    ///
    /// # Errors
    /// Implementations return `NotifyFailed` when the transport rejects the
    /// message. Callers in this crate never propagate it.
    fn notify(&self, message: &str, color: Color) -> Result<()>;
}

/// Drops every message. Used when chat notifications are disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _message: &str, _color: Color) -> Result<()> {
        Ok(())
    }
}

/// Writes every message to the `tracing` log at `info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, color: Color) -> Result<()> {
        tracing::info!(target: "orderdesk::notify", %color, "{message}");
        Ok(())
    }
}

/// Keeps every message in memory, in delivery order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far.
    #[must_use]
    pub fn sent(&self) -> Vec<Notification> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain and return everything delivered so far.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.sent.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, color: Color) -> Result<()> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Notification {
                message: message.to_string(),
                color,
            });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_accepts_everything() {
        assert!(NoopNotifier.notify("hello", Color::Red).is_ok());
    }

    #[test]
    fn tracing_notifier_never_fails() {
        assert!(TracingNotifier.notify("hello", Color::Gray).is_ok());
    }

    #[test]
    fn recording_keeps_order_and_drains() {
        let rec = RecordingNotifier::new();
        rec.notify("one", Color::Red).unwrap();
        rec.notify("two", Color::Green).unwrap();

        let sent = rec.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].message, "one");
        assert_eq!(sent[1].color, Color::Green);

        assert_eq!(rec.take().len(), 2);
        assert!(rec.sent().is_empty());
    }
}
