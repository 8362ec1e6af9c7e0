//! Record output sinks.
//!
//! The probe itself knows nothing about serialization; the batch driver
//! pushes each finalized outcome into one of these sinks. CSV matches the
//! column layout the downstream report tooling consumes; JSONL is the
//! structured alternative.

mod csv;
mod jsonl;

use std::path::Path;

use anyhow::Result;

use crate::config::OutputFormat;
use crate::probe::DomainOutcome;

pub use self::csv::CsvSink;
pub use self::jsonl::JsonlSink;

/// Format-dispatching output sink.
pub enum OutputSink {
    /// CSV rows with a header line
    Csv(CsvSink),
    /// One JSON object per line
    Jsonl(JsonlSink),
}

impl OutputSink {
    /// Opens the sink for `format`, stdout when `output` is `None`.
    pub fn create(
        format: OutputFormat,
        output: Option<&Path>,
        passthrough_columns: &[String],
    ) -> Result<Self> {
        match format {
            OutputFormat::Csv => Ok(OutputSink::Csv(CsvSink::create(output, passthrough_columns)?)),
            OutputFormat::Jsonl => Ok(OutputSink::Jsonl(JsonlSink::create(
                output,
                passthrough_columns,
            )?)),
        }
    }

    /// Appends one outcome record (with its passthrough values).
    pub fn write(&mut self, outcome: &DomainOutcome, passthrough: &[String]) -> Result<()> {
        match self {
            OutputSink::Csv(sink) => sink.write(outcome, passthrough),
            OutputSink::Jsonl(sink) => sink.write(outcome, passthrough),
        }
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        match self {
            OutputSink::Csv(sink) => sink.flush(),
            OutputSink::Jsonl(sink) => sink.flush(),
        }
    }
}
