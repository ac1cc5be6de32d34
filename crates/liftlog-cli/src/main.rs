use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use liftlog_cli::commands::{operations, report};
use liftlog_cli::{Cli, Commands, Config};

/// Pick the input file: explicit argument first, configured default second.
fn resolve_input(file: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    file.or_else(|| config.log_path.clone())
        .context("no input file given and no log_path configured")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Some(Commands::Report { file, json }) => {
            let input = resolve_input(file, &config)?;
            report::run(&input, json)?;
        }
        Some(Commands::Operations {
            file,
            anomalous,
            json,
        }) => {
            let input = resolve_input(file, &config)?;
            operations::run(&input, anomalous, json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
