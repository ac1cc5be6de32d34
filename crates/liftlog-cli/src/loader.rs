//! CSV event log loading.
//!
//! The loader is the boundary between the raw file and the core: every row
//! is either parsed into a valid [`LogEntry`] or rejected with a
//! row-numbered error. The core never sees a malformed entry.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;

use liftlog_core::{DeviceId, EntryId, EventKind, Floor, LogEntry, TIMESTAMP_FORMAT};

/// One raw CSV row, as the building controller writes it.
#[derive(Debug, Deserialize)]
struct RawRow {
    id: String,
    device_id: String,
    /// Signed floor number as text; the sign is the requested direction.
    data: String,
    #[serde(rename = "type")]
    kind: String,
    /// Timestamp in the fixed `YYYY-MM-DD HH:MM:SS` format.
    date: String,
}

impl RawRow {
    fn into_entry(self) -> Result<LogEntry> {
        let timestamp = NaiveDateTime::parse_from_str(&self.date, TIMESTAMP_FORMAT)
            .with_context(|| format!("unparseable timestamp {:?}", self.date))?;
        let floor = self
            .data
            .parse::<Floor>()
            .with_context(|| format!("unparseable floor {:?}", self.data))?;
        let kind = self.kind.parse::<EventKind>()?;
        Ok(LogEntry {
            id: EntryId::new(self.id)?,
            device_id: DeviceId::new(self.device_id)?,
            floor,
            kind,
            timestamp,
        })
    }
}

/// Loads every row of the event log at `path`.
///
/// Entries come back in file order; [`liftlog_core::LogEntryCollection`]
/// re-sorts them by timestamp.
pub fn load_entries(path: &Path) -> Result<Vec<LogEntry>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_entries(file).with_context(|| format!("failed to load {}", path.display()))
}

/// Parses entries from any CSV source. Expects a header row with the fields
/// `id`, `device_id`, `data`, `type`, `date`.
pub fn read_entries<R: Read>(reader: R) -> Result<Vec<LogEntry>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();
    for (idx, row) in csv_reader.deserialize().enumerate() {
        let row: RawRow = row.with_context(|| format!("invalid row {}", idx + 1))?;
        let entry = row
            .into_entry()
            .with_context(|| format!("invalid row {}", idx + 1))?;
        entries.push(entry);
    }
    tracing::debug!(count = entries.len(), "loaded log entries");
    Ok(entries)
}
