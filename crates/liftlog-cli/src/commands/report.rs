//! Report command: per-day average and median wait times.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use liftlog_core::{DailyStats, LogEntryCollection};

use crate::loader;

/// Formats the human-readable report, one line per date ascending.
///
/// Values are rounded to two decimal places. The -1 sentinel is printed
/// as-is: it marks a day with no non-anomalous operations.
pub fn format_report(stats: &BTreeMap<NaiveDate, DailyStats>) -> String {
    let mut output = String::new();

    if stats.is_empty() {
        writeln!(output, "No log entries found.").unwrap();
        return output;
    }

    for (date, day) in stats {
        let DailyStats { average, median } = *day;
        writeln!(
            output,
            "{date}: average {average:.2} seconds   median: {median:.2} seconds"
        )
        .unwrap();
    }

    output
}

/// One day of the JSON report.
#[derive(Debug, Serialize)]
struct JsonDay {
    date: NaiveDate,
    average: f64,
    median: f64,
}

/// Formats the report as pretty-printed JSON, one object per date ascending.
pub fn format_report_json(stats: &BTreeMap<NaiveDate, DailyStats>) -> Result<String> {
    let days: Vec<JsonDay> = stats
        .iter()
        .map(|(date, day)| JsonDay {
            date: *date,
            average: day.average,
            median: day.median,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&days)?)
}

/// Runs the report command.
pub fn run(input: &Path, json: bool) -> Result<()> {
    let entries = loader::load_entries(input)?;
    let collection = LogEntryCollection::new(entries);
    let stats = liftlog_core::daily_statistics(&collection);

    if json {
        println!("{}", format_report_json(&stats)?);
    } else {
        print!("{}", format_report(&stats));
    }

    Ok(())
}
