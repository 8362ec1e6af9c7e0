//! domain_probe library: find the live endpoint for batches of names.
//!
//! Given a list of domain or hostname names, this library determines for each
//! one whether an active website exists, and if so which scheme/subdomain
//! combination is the canonical reachable endpoint. Each name is probed with
//! HEAD requests (escalating once to GET on a 405) against an ordered set of
//! candidate URLs, stopping at the first 200; one outcome record with the
//! response evidence is produced per name.
//!
//! # Example
//!
//! ```no_run
//! use domain_probe::{run_batch, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     names_file: std::path::PathBuf::from("names.txt"),
//!     ..Default::default()
//! };
//!
//! let report = run_batch(config).await?;
//! println!(
//!     "Probed {} names: {} live, {} other status, {} unreachable",
//!     report.total_names, report.live, report.other_status, report.failed
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod candidates;
pub mod config;
mod error_handling;
pub mod export;
mod fetch;
pub mod initialization;
pub mod probe;

// Re-export public API
pub use config::{CandidateOrder, Config, InputFormat, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{FailureKind, InitializationError};
pub use fetch::ReqwestRequester;
pub use probe::{DomainOutcome, HttpRequester, HttpResponse, RequestMethod, Resolver};
pub use run::{run_batch, BatchReport};

// Internal run module (contains the batch driving logic)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;

    use crate::app::{read_names, Counters};
    use crate::config::Config;
    use crate::export::OutputSink;
    use crate::fetch::ReqwestRequester;
    use crate::initialization::init_client;
    use crate::probe::Resolver;

    /// Results of one batch run.
    #[derive(Debug, Clone)]
    pub struct BatchReport {
        /// Total number of names processed
        pub total_names: usize,
        /// Names that resolved to a 200 response
        pub live: usize,
        /// Names whose best outcome was a non-200 status
        pub other_status: usize,
        /// Names where every candidate failed without a response
        pub failed: usize,
        /// Path the records were written to (`None` means stdout)
        pub out_file: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a probe batch with the provided configuration.
    ///
    /// Reads the names, resolves each one strictly sequentially, writes one
    /// record per name to the configured sink, and reports the counter
    /// totals.
    ///
    /// # Errors
    ///
    /// Only endpoint setup can fail: the input file cannot be opened, the
    /// output sink cannot be created, or the HTTP client cannot be built.
    /// Per-name request failures never surface here; they are recorded in
    /// the outcome records.
    pub async fn run_batch(config: Config) -> Result<BatchReport> {
        let input = read_names(&config.names_file, config.input_format)?;
        info!("Total names in input: {}", input.entries.len());

        let client = init_client(&config)
            .await
            .context("Failed to initialize HTTP client")?;
        let resolver = Resolver::new(ReqwestRequester::new(client), config.candidate_order);

        let mut sink = OutputSink::create(
            config.output_format,
            config.out_file.as_deref(),
            &input.passthrough_columns,
        )?;

        let mut counters = Counters::default();
        let start_time = Instant::now();

        // One name at a time, resolved to completion before the next begins;
        // remote servers see serialized, polite pacing.
        for entry in &input.entries {
            let outcome = resolver.resolve(&entry.name).await;
            outcome.log();
            sink.write(&outcome, &entry.passthrough)?;
            counters.record(outcome.status_code);
        }

        sink.flush()?;
        counters.log_summary();

        Ok(BatchReport {
            total_names: counters.total_names,
            live: counters.total_200_status,
            other_status: counters.total_other_status,
            failed: counters.total_exceptions,
            out_file: config.out_file.clone(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
