//! Reconstructed elevator operations and the anomaly policy.

use serde::Serialize;

use crate::entry::LogEntry;

/// Waits longer than this many seconds are flagged as anomalous.
///
/// A wait of exactly this length is still considered normal.
pub const MAX_WAIT_SECS: i64 = 600;

/// Sentinel duration for operations missing either endpoint.
pub const MISSING_DURATION_SECS: i64 = -1;

/// One reconstructed elevator call: the button press that started it, any
/// redundant re-presses seen before the doors opened, and the door-open
/// event that resolved it.
///
/// Built once during reconstruction and never mutated afterwards. Either
/// endpoint may be absent when the log is incomplete; such operations are
/// retained for audit but flagged by [`Operation::is_anomalous`] and
/// excluded from statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    start: Option<LogEntry>,
    extra_calls: Vec<LogEntry>,
    end: Option<LogEntry>,
}

impl Operation {
    #[must_use]
    pub fn new(
        start: Option<LogEntry>,
        extra_calls: Vec<LogEntry>,
        end: Option<LogEntry>,
    ) -> Self {
        Self {
            start,
            extra_calls,
            end,
        }
    }

    /// The button call that opened this operation, if the log recorded one.
    #[must_use]
    pub fn start(&self) -> Option<&LogEntry> {
        self.start.as_ref()
    }

    /// Redundant re-presses between the first call and the door opening.
    ///
    /// Retained for audit only; they never affect the computed wait.
    #[must_use]
    pub fn extra_calls(&self) -> &[LogEntry] {
        &self.extra_calls
    }

    /// The door-open event that resolved this operation, if any.
    #[must_use]
    pub fn end(&self) -> Option<&LogEntry> {
        self.end.as_ref()
    }

    /// Whole seconds between the first button call and the doors opening,
    /// or [`MISSING_DURATION_SECS`] when either endpoint is absent.
    #[must_use]
    pub fn duration_secs(&self) -> i64 {
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => (end.timestamp - start.timestamp).num_seconds(),
            _ => MISSING_DURATION_SECS,
        }
    }

    /// True when the operation cannot be trusted for wait-time statistics:
    /// a missing endpoint, a negative duration, or a wait longer than
    /// [`MAX_WAIT_SECS`].
    #[must_use]
    pub fn is_anomalous(&self) -> bool {
        if self.start.is_none() || self.end.is_none() {
            return true;
        }
        !(0..=MAX_WAIT_SECS).contains(&self.duration_secs())
    }
}
