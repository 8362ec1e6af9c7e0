//! Tests for input parsing (flat lists and CSV with passthrough columns).

use std::io::Write;

use tempfile::NamedTempFile;

use domain_probe::app::read_names;
use domain_probe::InputFormat;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_list_file_skips_comments_and_blanks() {
    let file = write_temp("# tld batch\n\nexample.science\n   \nwww.example.com\n# done\n");
    let batch = read_names(file.path(), InputFormat::List).unwrap();

    let names: Vec<&str> = batch.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["example.science", "www.example.com"]);
    assert!(batch.passthrough_columns.is_empty());
    assert!(batch.entries.iter().all(|e| e.passthrough.is_empty()));
}

#[test]
fn test_list_file_trims_whitespace() {
    let file = write_temp("  example.com  \n\texample.org\t\n");
    let batch = read_names(file.path(), InputFormat::List).unwrap();

    assert_eq!(batch.entries[0].name, "example.com");
    assert_eq!(batch.entries[1].name, "example.org");
}

#[test]
fn test_csv_file_carries_passthrough_columns() {
    let file = write_temp(
        "hostname,data_set,page_count\n\
         www.example.science,CC-MAIN-2024-10,42\n\
         example.com,CC-MAIN-2024-10,7\n",
    );
    let batch = read_names(file.path(), InputFormat::Csv).unwrap();

    assert_eq!(batch.passthrough_columns, vec!["data_set", "page_count"]);
    assert_eq!(batch.entries.len(), 2);
    assert_eq!(batch.entries[0].name, "www.example.science");
    assert_eq!(batch.entries[0].passthrough, vec!["CC-MAIN-2024-10", "42"]);
}

#[test]
fn test_empty_list_file_yields_empty_batch() {
    let file = write_temp("");
    let batch = read_names(file.path(), InputFormat::List).unwrap();
    assert!(batch.entries.is_empty());
}

#[test]
fn test_missing_file_is_an_error() {
    let result = read_names(
        std::path::Path::new("/nonexistent/never/names.txt"),
        InputFormat::List,
    );
    assert!(result.is_err());
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to open input file"));
}
