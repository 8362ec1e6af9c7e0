//! Tests for CLI argument parsing.

use clap::Parser;
use std::path::PathBuf;

use domain_probe::{CandidateOrder, Config, InputFormat, LogFormat, LogLevel, OutputFormat};

#[test]
fn test_minimal_invocation_uses_defaults() {
    let config = Config::try_parse_from(["domain_probe", "names.txt"]).unwrap();
    assert_eq!(config.names_file, PathBuf::from("names.txt"));
    assert!(config.out_file.is_none());
    assert_eq!(config.input_format, InputFormat::List);
    assert_eq!(config.output_format, OutputFormat::Csv);
    assert_eq!(config.candidate_order, CandidateOrder::HttpsFirst);
    assert_eq!(config.timeout_seconds, 10);
    assert!(matches!(config.log_level, LogLevel::Info));
    assert!(matches!(config.log_format, LogFormat::Plain));
}

#[test]
fn test_stdin_sentinel_is_accepted() {
    let config = Config::try_parse_from(["domain_probe", "-"]).unwrap();
    assert_eq!(config.names_file, PathBuf::from("-"));
}

#[test]
fn test_all_flags_override_defaults() {
    let config = Config::try_parse_from([
        "domain_probe",
        "hostnames.csv",
        "--out-file",
        "checked.csv",
        "--input-format",
        "csv",
        "--output-format",
        "jsonl",
        "--candidate-order",
        "http-first",
        "--timeout-seconds",
        "5",
        "--user-agent",
        "test-agent/1.0",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .unwrap();

    assert_eq!(config.out_file, Some(PathBuf::from("checked.csv")));
    assert_eq!(config.input_format, InputFormat::Csv);
    assert_eq!(config.output_format, OutputFormat::Jsonl);
    assert_eq!(config.candidate_order, CandidateOrder::HttpFirst);
    assert_eq!(config.timeout_seconds, 5);
    assert_eq!(config.user_agent, "test-agent/1.0");
    assert!(matches!(config.log_level, LogLevel::Debug));
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_names_file_is_required() {
    assert!(Config::try_parse_from(["domain_probe"]).is_err());
}

#[test]
fn test_invalid_candidate_order_is_rejected() {
    let result =
        Config::try_parse_from(["domain_probe", "names.txt", "--candidate-order", "random"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_timeout_is_rejected() {
    let result =
        Config::try_parse_from(["domain_probe", "names.txt", "--timeout-seconds", "soon"]);
    assert!(result.is_err());
}
