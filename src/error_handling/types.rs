//! Error type definitions.
//!
//! Two kinds of trouble exist here and they are handled very differently:
//!
//! - `FailureKind` is a *value*, not an error: a request that could not be
//!   completed is reduced to a symbolic kind and recorded in the outcome for
//!   its name. It never propagates.
//! - `InitializationError` and fatal I/O errors (input file, output sink) do
//!   propagate, because the batch cannot proceed without its endpoints.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use strum_macros::{Display as DisplayMacro, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Symbolic classification of a failed request attempt.
///
/// Any error raised while issuing a request is absorbed into one of these
/// kinds; the probe itself never fails. The kebab-case labels are what end up
/// in the `exception_kind` column of the output records.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, DisplayMacro, EnumIterMacro, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// Connection refused, DNS failure, or the connection dropped
    ConnectionError,
    /// Timed out while establishing the connection
    ConnectionTimeout,
    /// Connected, but timed out waiting for the response
    ReadTimeout,
    /// TLS negotiation or certificate validation failed
    TlsError,
    /// Anything reqwest reports that does not fit the categories above
    Other,
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_failure_kind_labels_are_kebab_case() {
        let labels: Vec<String> = FailureKind::iter().map(|k| k.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "connection-error",
                "connection-timeout",
                "read-timeout",
                "tls-error",
                "other"
            ]
        );
    }

    #[test]
    fn test_failure_kind_serializes_to_label() {
        let json = serde_json::to_string(&FailureKind::ConnectionTimeout).unwrap();
        assert_eq!(json, "\"connection-timeout\"");
    }
}
