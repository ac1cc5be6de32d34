//! Operation reconstruction from raw log entries.
//!
//! Pairing a button call with a door-open is only meaningful within a single
//! floor's timeline on a single day, so the driver partitions by date, then
//! by floor, and reconstructs each partition independently.

use crate::collection::LogEntryCollection;
use crate::entry::LogEntry;
use crate::kind::EventKind;
use crate::operation::Operation;

/// Reconstructs operations across every (date, floor) partition of a
/// collection.
///
/// Partition outputs are concatenated; order across partitions carries no
/// meaning, since the downstream statistics are order-independent.
#[must_use]
pub fn reconstruct(collection: &LogEntryCollection) -> Vec<Operation> {
    let mut operations = Vec::new();
    for (date, day) in collection.split_by_date() {
        for (floor, partition) in day.split_by_floor() {
            let reconstructed = reconstruct_partition(&partition);
            tracing::debug!(%date, floor, count = reconstructed.len(), "reconstructed partition");
            operations.extend(reconstructed);
        }
    }
    operations
}

/// Reconstructs operations from one single-day, single-floor partition.
///
/// A single linear pass in timestamp order: the first button call opens a
/// pending operation, further calls before the doors open are recorded as
/// redundant re-presses, and a door-open closes the operation. A door-open
/// with no pending call still emits an operation (with no start), which the
/// anomaly policy flags later. A pending call never answered by a door-open
/// emits nothing.
#[must_use]
pub fn reconstruct_partition(partition: &LogEntryCollection) -> Vec<Operation> {
    let mut operations = Vec::new();
    let mut pending_start: Option<LogEntry> = None;
    let mut pending_extras: Vec<LogEntry> = Vec::new();

    for entry in partition {
        match entry.kind {
            EventKind::ButtonCall => {
                if pending_start.is_none() {
                    pending_start = Some(entry.clone());
                } else {
                    pending_extras.push(entry.clone());
                }
            }
            EventKind::DoorOpen => {
                operations.push(Operation::new(
                    pending_start.take(),
                    std::mem::take(&mut pending_extras),
                    Some(entry.clone()),
                ));
            }
        }
    }

    if let Some(unanswered) = pending_start {
        tracing::debug!(id = %unanswered.id, "dropping call never answered by a door-open");
    }

    operations
}
