//! Operator notifications.
//!
//! The form and the roster actions never talk to a UI directly; they emit
//! [`Notification`]s through an injected [`Notifier`]. The TUI appends them to
//! its notice log, tests record them.

use std::cell::RefCell;

use roster_types::Severity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, description)
    }
}

/// Receives notifications emitted by the submit and export paths.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Keeps every notification in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    entries: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn entries(&self) -> Vec<Notification> {
        self.entries.borrow().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.entries.borrow().last().cloned()
    }

    pub fn take(&self) -> Vec<Notification> {
        self.entries.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.entries.borrow_mut().push(notification);
    }
}
