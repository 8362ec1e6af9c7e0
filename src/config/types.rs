//! Configuration types and CLI options.
//!
//! This module defines the enums and the `Config` struct used for
//! command-line argument parsing and programmatic configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_USER_AGENT, REQUEST_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Order in which scheme/subdomain candidates are tried for a name.
///
/// Both orders are in live use across deployments; neither is more correct
/// than the other, so the choice is an explicit policy rather than a
/// hardcoded sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CandidateOrder {
    /// https://name, https://www.name, http://name, http://www.name
    HttpsFirst,
    /// http://name, http://www.name, https://name, https://www.name
    HttpFirst,
}

/// Input file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Flat text file, one name per line
    List,
    /// CSV with a header row; the first column holds the name and the
    /// remaining columns pass through to the output unchanged
    Csv,
}

/// Output record format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One CSV row per name, header included
    Csv,
    /// One JSON object per line
    Jsonl,
}

/// Command-line options and configuration.
///
/// This struct is generated by `clap` from the field attributes. All options
/// have defaults and can be overridden via command-line flags. It doubles as
/// the library configuration; `Default` gives a programmatic starting point.
///
/// # Examples
///
/// ```bash
/// # Basic usage: probe names from a flat list, CSV records to stdout
/// domain_probe names.txt
///
/// # Write CSV to a file, trying http before https
/// domain_probe names.txt --out-file results.csv --candidate-order http-first
///
/// # Re-check a Common Crawl hostname CSV, passing extra columns through
/// domain_probe hostnames.csv --input-format csv --out-file checked.csv
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_probe",
    about = "Finds the live endpoint for each domain or hostname in a list."
)]
pub struct Config {
    /// File containing names to probe ("-" reads from stdin)
    #[arg(value_parser)]
    pub names_file: PathBuf,

    /// Output file for result records (stdout when omitted)
    #[arg(long, value_parser)]
    pub out_file: Option<PathBuf>,

    /// Input format: list|csv
    #[arg(long, value_enum, default_value_t = InputFormat::List)]
    pub input_format: InputFormat,

    /// Output format: csv|jsonl
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub output_format: OutputFormat,

    /// Candidate order policy: https-first|http-first
    #[arg(long, value_enum, default_value_t = CandidateOrder::HttpsFirst)]
    pub candidate_order: CandidateOrder,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            names_file: PathBuf::from("names.txt"),
            out_file: None,
            input_format: InputFormat::List,
            output_format: OutputFormat::Csv,
            candidate_order: CandidateOrder::HttpsFirst,
            timeout_seconds: REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
