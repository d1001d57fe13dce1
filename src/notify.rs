//! User-facing notifications.
//!
//! DESIGN
//! ======
//! Call sites talk to a [`NotificationSink`], never to the console directly,
//! so a toast layer can replace [`LogSink`] without touching them.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Notification severity. Unknown labels are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Error,
    Success,
    Other(String),
}

impl Severity {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "info" => Self::Info,
            "error" => Self::Error,
            "success" => Self::Success,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
            Self::Success => "success",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Severity {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Destination for `(message, severity)` pairs.
pub trait NotificationSink {
    fn emit(&self, message: &str, severity: &Severity);
}

impl<T: NotificationSink + ?Sized> NotificationSink for &T {
    fn emit(&self, message: &str, severity: &Severity) {
        (**self).emit(message, severity);
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for Rc<T> {
    fn emit(&self, message: &str, severity: &Severity) {
        (**self).emit(message, severity);
    }
}

/// `[ERROR] something broke`
#[must_use]
pub fn format_notification(message: &str, severity: &Severity) -> String {
    format!("[{}] {message}", severity.as_str().to_uppercase())
}

/// Writes notifications through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn emit(&self, message: &str, severity: &Severity) {
        let line = format_notification(message, severity);
        if *severity == Severity::Error {
            log::error!("{line}");
        } else {
            log::info!("{line}");
        }
    }
}

/// Keeps every emitted notification in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: RefCell<Vec<(String, Severity)>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> Vec<(String, Severity)> {
        self.entries.borrow().clone()
    }

    #[must_use]
    pub fn count(&self, severity: &Severity) -> usize {
        self.entries.borrow().iter().filter(|(_, s)| s == severity).count()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl NotificationSink for MemorySink {
    fn emit(&self, message: &str, severity: &Severity) {
        self.entries.borrow_mut().push((message.to_owned(), severity.clone()));
    }
}

pub fn show_notification(sink: &impl NotificationSink, message: &str, severity: &Severity) {
    sink.emit(message, severity);
}

pub fn show_error(sink: &impl NotificationSink, message: &str) {
    show_notification(sink, message, &Severity::Error);
}

pub fn show_success(sink: &impl NotificationSink, message: &str) {
    show_notification(sink, message, &Severity::Success);
}
