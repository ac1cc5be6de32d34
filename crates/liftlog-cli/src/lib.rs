//! Elevator wait-time analyzer CLI library.
//!
//! This crate provides the command-line interface around `liftlog-core`:
//! loading event logs from CSV and rendering per-day reports.

mod cli;
pub mod commands;
mod config;
pub mod loader;

pub use cli::{Cli, Commands};
pub use config::Config;
