//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_probe` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_probe::initialization::init_logger_with;
use domain_probe::{run_batch, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the batch using the library
    match run_batch(config).await {
        Ok(report) => {
            println!(
                "✅ Probed {} name{} ({} live, {} other status, {} unreachable) in {:.1}s",
                report.total_names,
                if report.total_names == 1 { "" } else { "s" },
                report.live,
                report.other_status,
                report.failed,
                report.elapsed_seconds
            );
            if let Some(path) = &report.out_file {
                println!("Results saved in {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_probe error: {:#}", e);
            process::exit(1);
        }
    }
}
