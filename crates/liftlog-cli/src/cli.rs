//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Elevator wait-time analyzer.
///
/// Reads a device event log and reports, per calendar day, the average and
/// median wait between a button call and the doors opening.
#[derive(Debug, Parser)]
#[command(name = "liftlog", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Per-day average and median wait times.
    Report {
        /// Path to the event log CSV. Falls back to the configured log path.
        file: Option<PathBuf>,

        /// Emit JSON instead of the human-readable report.
        #[arg(long)]
        json: bool,
    },

    /// List reconstructed operations, including anomalous ones.
    Operations {
        /// Path to the event log CSV. Falls back to the configured log path.
        file: Option<PathBuf>,

        /// Only show operations flagged as anomalous.
        #[arg(long)]
        anomalous: bool,

        /// Emit JSON instead of the human-readable listing.
        #[arg(long)]
        json: bool,
    },
}
