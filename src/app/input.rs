//! Name-list input.
//!
//! Two input shapes, matching how the name batches arrive in practice:
//! a flat text file (one name per line) or a CSV where the first column is
//! the name and the remaining columns (dataset tags, page counts) ride along
//! into the output untouched.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::InputFormat;

/// One input name plus its passthrough column values (empty for list input).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameEntry {
    /// The trimmed name to probe
    pub name: String,
    /// Passthrough cell values, aligned with `InputBatch::passthrough_columns`
    pub passthrough: Vec<String>,
}

/// A fully read input batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputBatch {
    /// Header names of the passthrough columns (empty for list input)
    pub passthrough_columns: Vec<String>,
    /// The names to probe, in input order
    pub entries: Vec<NameEntry>,
}

/// Reads the batch of names from `path` (`-` reads stdin).
///
/// This is one of the two fatal spots in the pipeline: a batch without its
/// input cannot proceed, so open/read errors propagate.
pub fn read_names(path: &Path, format: InputFormat) -> Result<InputBatch> {
    let reader: Box<dyn Read> = if path.as_os_str() == "-" {
        Box::new(io::stdin())
    } else {
        Box::new(File::open(path).with_context(|| {
            format!("Failed to open input file: {}", path.display())
        })?)
    };

    match format {
        InputFormat::List => read_list(BufReader::new(reader)),
        InputFormat::Csv => read_csv(reader),
    }
}

/// Flat list: trim each line, skip blanks and `#` comments.
fn read_list(reader: impl BufRead) -> Result<InputBatch> {
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read line from input")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        entries.push(NameEntry {
            name: trimmed.to_string(),
            passthrough: Vec::new(),
        });
    }
    Ok(InputBatch {
        passthrough_columns: Vec::new(),
        entries,
    })
}

/// CSV with header row: first column is the name, the rest pass through.
fn read_csv(reader: impl Read) -> Result<InputBatch> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader
        .headers()
        .context("Failed to read CSV header")?
        .clone();
    let passthrough_columns: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

    let mut entries = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("Failed to read CSV record")?;
        let name = record.get(0).unwrap_or("").trim().to_string();
        if name.is_empty() {
            continue;
        }
        let mut passthrough: Vec<String> = record.iter().skip(1).map(str::to_string).collect();
        // Short rows pad out so every record lines up with the header.
        passthrough.resize(passthrough_columns.len(), String::new());
        entries.push(NameEntry { name, passthrough });
    }

    Ok(InputBatch {
        passthrough_columns,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_list_trims_and_skips_blanks_and_comments() {
        let input = "# header comment\n\n  example.com  \n\t\nexample.science\n# trailing\n";
        let batch = read_list(Cursor::new(input)).unwrap();
        assert!(batch.passthrough_columns.is_empty());
        let names: Vec<&str> = batch.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["example.com", "example.science"]);
    }

    #[test]
    fn test_csv_first_column_is_name_rest_pass_through() {
        let input = "hostname,data_set,page_count\nwww.example.science,CC-MAIN-2024-10,42\nexample.com,CC-MAIN-2024-10,7\n";
        let batch = read_csv(Cursor::new(input)).unwrap();
        assert_eq!(batch.passthrough_columns, vec!["data_set", "page_count"]);
        assert_eq!(batch.entries.len(), 2);
        assert_eq!(batch.entries[0].name, "www.example.science");
        assert_eq!(batch.entries[0].passthrough, vec!["CC-MAIN-2024-10", "42"]);
        assert_eq!(batch.entries[1].name, "example.com");
    }

    #[test]
    fn test_csv_short_rows_are_padded() {
        let input = "hostname,data_set,page_count\nexample.com,CC-MAIN-2024-10\n";
        let batch = read_csv(Cursor::new(input)).unwrap();
        assert_eq!(batch.entries[0].passthrough, vec!["CC-MAIN-2024-10", ""]);
    }

    #[test]
    fn test_csv_blank_names_are_skipped() {
        let input = "hostname,data_set\n,orphan\nexample.com,ok\n";
        let batch = read_csv(Cursor::new(input)).unwrap();
        assert_eq!(batch.entries.len(), 1);
        assert_eq!(batch.entries[0].name, "example.com");
    }

    #[test]
    fn test_missing_input_file_is_fatal() {
        let result = read_names(
            Path::new("/nonexistent/never/names.txt"),
            InputFormat::List,
        );
        assert!(result.is_err());
    }
}
