//! End-to-end tests for the complete analysis flow.
//!
//! Each test writes a CSV event log to a temp directory and drives the
//! built binary: load → partition → reconstruct → aggregate → report.

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

fn liftlog_binary() -> String {
    env!("CARGO_BIN_EXE_liftlog").to_string()
}

const SAMPLE_LOG: &str = "\
id,device_id,data,type,date
1,lift-a,5,button_call,2024-03-01 09:00:00
2,lift-a,5,button_call,2024-03-01 09:00:15
3,lift-a,5,door_open,2024-03-01 09:00:30
4,lift-a,-3,button_call,2024-03-01 10:00:00
5,lift-a,3,door_open,2024-03-01 10:01:00
6,lift-b,7,door_open,2024-03-02 08:00:00
7,lift-b,2,button_call,2024-03-02 08:30:00
8,lift-b,2,door_open,2024-03-02 08:30:45
";

/// Writes the sample log into a temp dir and returns (dir, csv path).
fn write_sample_log() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("lift.csv");
    std::fs::write(&path, SAMPLE_LOG).unwrap();
    (temp, path)
}

#[test]
fn test_report_per_day() {
    let (temp, log) = write_sample_log();

    let output = Command::new(liftlog_binary())
        .env("HOME", temp.path())
        .arg("report")
        .arg(&log)
        .output()
        .expect("failed to run liftlog report");

    assert!(
        output.status.success(),
        "report should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // Day one pairs waits of 30s (floor 5, one re-press) and 60s (floor 3,
    // the down call and the door-open share the landing). Day two has one
    // 45s wait; the lone door-open on floor 7 is anomalous and excluded.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "2024-03-01: average 45.00 seconds   median: 45.00 seconds\n\
         2024-03-02: average 45.00 seconds   median: 45.00 seconds\n"
    );
}

#[test]
fn test_report_json() {
    let (temp, log) = write_sample_log();

    let output = Command::new(liftlog_binary())
        .env("HOME", temp.path())
        .arg("report")
        .arg(&log)
        .arg("--json")
        .output()
        .expect("failed to run liftlog report --json");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let days = parsed.as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2024-03-01");
    assert_eq!(days[0]["average"], 45.0);
    assert_eq!(days[1]["median"], 45.0);
}

#[test]
fn test_operations_listing_flags_anomalies() {
    let (temp, log) = write_sample_log();

    let output = Command::new(liftlog_binary())
        .env("HOME", temp.path())
        .arg("operations")
        .arg(&log)
        .output()
        .expect("failed to run liftlog operations");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("4 operations, 1 anomalous"), "got: {stdout}");
    assert!(stdout.contains("[anomalous]"), "got: {stdout}");
}

#[test]
fn test_operations_anomalous_filter() {
    let (temp, log) = write_sample_log();

    let output = Command::new(liftlog_binary())
        .env("HOME", temp.path())
        .arg("operations")
        .arg(&log)
        .arg("--anomalous")
        .output()
        .expect("failed to run liftlog operations --anomalous");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2024-03-02 08:00:00"), "got: {stdout}");
    assert!(stdout.contains("1 operations, 1 anomalous"), "got: {stdout}");
    assert!(!stdout.contains("floor   5"), "got: {stdout}");
}

#[test]
fn test_configured_log_path_is_the_fallback() {
    let (temp, log) = write_sample_log();

    let output = Command::new(liftlog_binary())
        .env("HOME", temp.path())
        .env_remove("XDG_CONFIG_HOME")
        .env("LIFTLOG_LOG_PATH", &log)
        .arg("report")
        .output()
        .expect("failed to run liftlog report with env config");

    assert!(
        output.status.success(),
        "configured log path should be used: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2024-03-01"), "got: {stdout}");
}

#[test]
fn test_missing_input_is_an_error() {
    let temp = TempDir::new().unwrap();

    let output = Command::new(liftlog_binary())
        .env("HOME", temp.path())
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("LIFTLOG_LOG_PATH")
        .arg("report")
        .output()
        .expect("failed to run liftlog report without input");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no input file given"),
        "got: {stderr}"
    );
}

#[test]
fn test_malformed_row_fails_loudly() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("lift.csv");
    std::fs::write(
        &path,
        "id,device_id,data,type,date\n1,lift-a,5,button_call,not a date\n",
    )
    .unwrap();

    let output = Command::new(liftlog_binary())
        .env("HOME", temp.path())
        .arg("report")
        .arg(&path)
        .output()
        .expect("failed to run liftlog report on malformed log");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid row 1"), "got: {stderr}");
}
