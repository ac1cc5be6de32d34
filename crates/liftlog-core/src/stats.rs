//! Wait-time statistics over reconstructed operations.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::builder;
use crate::collection::LogEntryCollection;
use crate::operation::Operation;

/// Sentinel returned when no operation survives the anomaly filter.
pub const UNDEFINED_STAT: f64 = -1.0;

/// Per-day wait-time summary. Both fields may be [`UNDEFINED_STAT`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyStats {
    pub average: f64,
    pub median: f64,
}

/// Durations of the operations that pass the anomaly filter, in seconds.
fn valid_durations(operations: &[Operation]) -> Vec<i64> {
    operations
        .iter()
        .filter(|op| !op.is_anomalous())
        .map(Operation::duration_secs)
        .collect()
}

/// Arithmetic mean of the non-anomalous operation durations, in seconds.
///
/// Returns [`UNDEFINED_STAT`] when no operation survives the filter; an
/// undefined statistic is a reportable value here, not an error.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn average(operations: &[Operation]) -> f64 {
    let durations = valid_durations(operations);
    if durations.is_empty() {
        return UNDEFINED_STAT;
    }
    durations.iter().sum::<i64>() as f64 / durations.len() as f64
}

/// Median of the non-anomalous operation durations, in seconds; the mean of
/// the two middle values for even counts.
///
/// Returns [`UNDEFINED_STAT`] when no operation survives the filter.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn median(operations: &[Operation]) -> f64 {
    let mut durations = valid_durations(operations);
    if durations.is_empty() {
        return UNDEFINED_STAT;
    }
    durations.sort_unstable();
    let mid = durations.len() / 2;
    if durations.len() % 2 == 0 {
        (durations[mid - 1] + durations[mid]) as f64 / 2.0
    } else {
        durations[mid] as f64
    }
}

/// Computes the per-day report: every date present in the collection mapped
/// to the average and median wait across that day's operations.
#[must_use]
pub fn daily_statistics(collection: &LogEntryCollection) -> BTreeMap<NaiveDate, DailyStats> {
    collection
        .split_by_date()
        .into_iter()
        .map(|(date, day)| {
            let operations = builder::reconstruct(&day);
            let stats = DailyStats {
                average: average(&operations),
                median: median(&operations),
            };
            tracing::debug!(%date, operations = operations.len(), "computed daily statistics");
            (date, stats)
        })
        .collect()
}
