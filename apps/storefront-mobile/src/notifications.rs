//! Notifications port for user-facing notices (toasts)

use std::sync::{Mutex, PoisonError};
use strum::Display;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Receives notices raised by product actions; the UI supplies its own.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, kind: NoticeKind);
}

/// Logs notices instead of showing them
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, kind: NoticeKind) {
        match kind {
            NoticeKind::Success => info!(%kind, "{}", message),
            NoticeKind::Error => warn!(%kind, "{}", message),
        }
    }
}

/// Keeps every notice in memory, oldest first
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<(String, NoticeKind)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<(String, NoticeKind)> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<(String, NoticeKind)> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, kind: NoticeKind) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((message.to_string(), kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify("first", NoticeKind::Success);
        notifier.notify("second", NoticeKind::Error);

        assert_eq!(notifier.notices().len(), 2);
        assert_eq!(notifier.last(), Some(("second".to_string(), NoticeKind::Error)));
        assert_eq!(NoticeKind::Error.to_string(), "error");
    }
}
