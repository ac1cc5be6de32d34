//! Core domain logic for elevator wait-time analysis.
//!
//! This crate contains the fundamental types and logic for:
//! - Log entries: normalized button-call and door-open device events
//! - Collections: timestamp-sorted entry sequences with day/floor partitioning
//! - Reconstruction: pairing each button call with its resolving door-open
//! - Statistics: average and median wait times, excluding anomalies
//!
//! The crate performs no I/O. Loading raw events and rendering reports are
//! the responsibility of the surrounding CLI.

pub mod builder;
pub mod collection;
pub mod entry;
pub mod kind;
pub mod operation;
pub mod stats;
pub mod types;

pub use builder::{reconstruct, reconstruct_partition};
pub use collection::LogEntryCollection;
pub use entry::{LogEntry, TIMESTAMP_FORMAT};
pub use kind::{EventKind, UnknownEventKind};
pub use operation::{MAX_WAIT_SECS, MISSING_DURATION_SECS, Operation};
pub use stats::{DailyStats, UNDEFINED_STAT, average, daily_statistics, median};
pub use types::{DeviceId, Direction, EntryId, Floor, ValidationError};
