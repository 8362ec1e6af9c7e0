//! CSV record sink.
//!
//! One row per probed name, header first. Absent fields (no status code for
//! failures, no exception kind for responses) are written as empty cells.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use crate::probe::DomainOutcome;

/// Fixed record columns; passthrough columns from CSV input follow them.
const RECORD_COLUMNS: [&str; 7] = [
    "name",
    "request_url",
    "request_type",
    "exception_kind",
    "status_code",
    "status_reason",
    "response_url",
];

/// Streaming CSV writer for outcome records.
pub struct CsvSink {
    writer: Writer<Box<dyn Write>>,
}

impl CsvSink {
    /// Creates the sink and writes the header row. Writes to stdout when no
    /// output path is given.
    ///
    /// Failure here is fatal to the batch: there is nowhere to put records.
    pub fn create(output: Option<&Path>, passthrough_columns: &[String]) -> Result<Self> {
        let raw: Box<dyn Write> = match output {
            Some(path) => Box::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(io::stdout()),
        };
        let mut writer = Writer::from_writer(raw);

        let mut header: Vec<&str> = RECORD_COLUMNS.to_vec();
        header.extend(passthrough_columns.iter().map(String::as_str));
        writer
            .write_record(&header)
            .context("Failed to write CSV header")?;

        Ok(CsvSink { writer })
    }

    /// Appends one outcome record.
    pub fn write(&mut self, outcome: &DomainOutcome, passthrough: &[String]) -> Result<()> {
        let mut record = vec![
            outcome.name.clone(),
            outcome.request_url.clone(),
            outcome.request_type.to_string(),
            outcome
                .exception_kind
                .map(|k| k.to_string())
                .unwrap_or_default(),
            outcome
                .status_code
                .map(|c| c.to_string())
                .unwrap_or_default(),
            outcome.status_reason.clone().unwrap_or_default(),
            outcome.response_url.clone().unwrap_or_default(),
        ];
        record.extend(passthrough.iter().cloned());
        self.writer
            .write_record(&record)
            .context("Failed to write CSV record")
    }

    /// Flushes buffered rows to the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush CSV output")
    }
}
