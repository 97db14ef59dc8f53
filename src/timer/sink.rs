//! Outbound capabilities of a session: presentation and event logging.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::info;

use super::status::{Controls, Status};

/// Everything a session can show the user.
#[cfg_attr(test, mockall::automock)]
pub trait Presenter {
    /// Show the remaining time.
    fn render_remaining(&mut self, remaining_seconds: u64);

    /// Show a status line.
    fn render_status(&mut self, status: &Status);

    /// Show the completion screen.
    fn show_completion(&mut self);

    /// Hide the completion screen.
    fn hide_completion(&mut self);

    /// Enable or disable inputs.
    fn set_controls(&mut self, controls: Controls);
}

/// Receives timestamped session events.
pub trait LogSink {
    /// Record one event.
    fn append(&mut self, at: DateTime<Local>, message: &str);
}

/// A recorded event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// When it happened.
    pub at: DateTime<Local>,
    /// What happened, already sanitized.
    pub message: String,
}

impl LogEntry {
    /// One display line, `▶ [HH:MM:SS] message`.
    #[must_use]
    pub fn line(&self) -> String {
        format!("▶ [{}] {}", self.at.format("%H:%M:%S"), self.message)
    }
}

/// Default number of entries kept by [`MemoryLog`].
pub const DEFAULT_LOG_CAPACITY: usize = 200;

/// Bounded, newest-first event log.
#[derive(Debug, Clone)]
pub struct MemoryLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl MemoryLog {
    /// Create a log holding at most `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_LOG_CAPACITY)),
            capacity: capacity.max(1),
        }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().rev().map(|e| e.message.as_str()).collect()
    }

    /// Number of entries held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}

impl LogSink for MemoryLog {
    fn append(&mut self, at: DateTime<Local>, message: &str) {
        let message = sanitize(message);
        info!(target: "dawdle::session", "{message}");

        self.entries.push_front(LogEntry { at, message });
        self.entries.truncate(self.capacity);
    }
}

/// Make a message safe to print to a terminal.
///
/// Line breaks and tabs become spaces; other control characters (ESC in
/// particular, which starts escape sequences) become U+FFFD.
#[must_use]
pub fn sanitize(message: &str) -> String {
    message
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => char::REPLACEMENT_CHARACTER,
            c => c,
        })
        .collect()
}
