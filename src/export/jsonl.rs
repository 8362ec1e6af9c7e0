//! JSONL record sink: one JSON object per line.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::probe::DomainOutcome;

/// Streaming JSONL writer for outcome records.
pub struct JsonlSink {
    writer: BufWriter<Box<dyn Write>>,
    passthrough_columns: Vec<String>,
}

impl JsonlSink {
    /// Creates the sink. Writes to stdout when no output path is given.
    pub fn create(output: Option<&Path>, passthrough_columns: &[String]) -> Result<Self> {
        let raw: Box<dyn Write> = match output {
            Some(path) => Box::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?),
            None => Box::new(io::stdout()),
        };
        Ok(JsonlSink {
            writer: BufWriter::new(raw),
            passthrough_columns: passthrough_columns.to_vec(),
        })
    }

    /// Appends one outcome as a JSON object, with passthrough values merged
    /// in under their input column names.
    pub fn write(&mut self, outcome: &DomainOutcome, passthrough: &[String]) -> Result<()> {
        let mut value =
            serde_json::to_value(outcome).context("Failed to serialize outcome record")?;
        if let Some(map) = value.as_object_mut() {
            for (column, cell) in self.passthrough_columns.iter().zip(passthrough) {
                map.insert(column.clone(), serde_json::Value::String(cell.clone()));
            }
        }
        serde_json::to_writer(&mut self.writer, &value)
            .context("Failed to write JSONL record")?;
        writeln!(self.writer).context("Failed to write JSONL record")
    }

    /// Flushes buffered lines to the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush JSONL output")
    }
}
