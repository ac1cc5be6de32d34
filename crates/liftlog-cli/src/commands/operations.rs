//! Operations command: audit listing of reconstructed operations.
//!
//! Anomalous operations are excluded from the statistics but never thrown
//! away; this listing is where they can be inspected.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;

use liftlog_core::{LogEntryCollection, Operation};

use crate::loader;

/// Formats one line per operation, anchored on the first event it holds.
pub fn format_operations(operations: &[Operation]) -> String {
    let mut output = String::new();

    if operations.is_empty() {
        writeln!(output, "No operations reconstructed.").unwrap();
        return output;
    }

    for op in operations {
        let anchor = op.start().or_else(|| op.end());
        let when = anchor.map_or_else(|| "(no events)".to_string(), |e| e.timestamp.to_string());
        let floor = anchor.map_or_else(|| "?".to_string(), |e| e.floor.number().to_string());
        let wait = if op.duration_secs() < 0 {
            "n/a".to_string()
        } else {
            format!("{}s", op.duration_secs())
        };
        let extras = op.extra_calls().len();

        write!(
            output,
            "{when}  floor {floor:>3}  wait {wait:>6}  extra calls {extras}"
        )
        .unwrap();
        if op.is_anomalous() {
            write!(output, "  [anomalous]").unwrap();
        }
        writeln!(output).unwrap();
    }

    let total = operations.len();
    let anomalous = operations.iter().filter(|op| op.is_anomalous()).count();
    writeln!(output).unwrap();
    writeln!(output, "{total} operations, {anomalous} anomalous").unwrap();

    output
}

/// Runs the operations command.
pub fn run(input: &Path, anomalous_only: bool, json: bool) -> Result<()> {
    let entries = loader::load_entries(input)?;
    let collection = LogEntryCollection::new(entries);
    let mut operations = liftlog_core::reconstruct(&collection);

    if anomalous_only {
        operations.retain(Operation::is_anomalous);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&operations)?);
    } else {
        print!("{}", format_operations(&operations));
    }

    Ok(())
}
