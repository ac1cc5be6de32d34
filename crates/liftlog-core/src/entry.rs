//! Raw log entries from the building controller.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::kind::EventKind;
use crate::types::{DeviceId, EntryId, Floor};

/// The fixed timestamp format used by the event log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One normalized device event.
///
/// Entries are immutable once constructed. Timestamps are always present
/// and valid: rows that fail to parse are rejected by the loader and never
/// reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique identifier for this entry.
    pub id: EntryId,
    /// The controller that emitted the event.
    pub device_id: DeviceId,
    /// The floor the event concerns, with the requested direction in the sign.
    pub floor: Floor,
    /// What happened.
    pub kind: EventKind,
    /// When it happened. The log carries no time zone.
    pub timestamp: NaiveDateTime,
}

impl LogEntry {
    /// The calendar day this event occurred on.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LogEntry {
        LogEntry {
            id: EntryId::new("42").unwrap(),
            device_id: DeviceId::new("lift-a").unwrap(),
            floor: Floor::new(-5),
            kind: EventKind::ButtonCall,
            timestamp: NaiveDateTime::parse_from_str("2024-03-01 09:15:00", TIMESTAMP_FORMAT)
                .unwrap(),
        }
    }

    #[test]
    fn entry_serialization_roundtrip() {
        let entry = sample();

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: LogEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, entry);
    }

    #[test]
    fn entry_rejects_empty_ids() {
        let json = r#"{
            "id": "",
            "device_id": "lift-a",
            "floor": 5,
            "kind": "button_call",
            "timestamp": "2024-03-01T09:15:00"
        }"#;
        let result: Result<LogEntry, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn date_truncates_to_day() {
        let entry = sample();
        assert_eq!(entry.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn timestamp_format_parses_wire_dates() {
        let parsed = NaiveDateTime::parse_from_str("2024-12-31 23:59:59", TIMESTAMP_FORMAT);
        assert!(parsed.is_ok());

        let bad = NaiveDateTime::parse_from_str("31/12/2024 23:59", TIMESTAMP_FORMAT);
        assert!(bad.is_err());
    }
}
