//! Request error categorization.
//!
//! Reduces a `reqwest::Error` to the symbolic `FailureKind` recorded in the
//! outcome for a name.

use std::error::Error as StdError;

use super::types::FailureKind;

/// Categorizes a `reqwest::Error` into a `FailureKind`.
///
/// The probe records failures as values rather than propagating them, so
/// every possible request error must map to some kind. Timeouts are split
/// into connect vs. read by whether the connection was still being
/// established; TLS failures surface through reqwest as connect errors and
/// are told apart by inspecting the error chain.
pub fn classify_request_error(error: &reqwest::Error) -> FailureKind {
    if error.is_timeout() {
        return if error.is_connect() {
            FailureKind::ConnectionTimeout
        } else {
            FailureKind::ReadTimeout
        };
    }

    if error.is_connect() {
        return if chain_mentions_tls(error) {
            FailureKind::TlsError
        } else {
            FailureKind::ConnectionError
        };
    }

    // Request errors outside the connect phase (reset, aborted body reads)
    // still count as connection-class failures.
    if error.is_request() {
        return FailureKind::ConnectionError;
    }

    FailureKind::Other
}

/// Walks the error source chain looking for TLS vocabulary.
///
/// reqwest does not expose a TLS error predicate, and the concrete error type
/// depends on the TLS backend, so string matching the chain is the portable
/// check.
fn chain_mentions_tls(error: &reqwest::Error) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(error);
    while let Some(err) = current {
        let msg = err.to_string().to_ascii_lowercase();
        if msg.contains("certificate")
            || msg.contains("handshake")
            || msg.contains("tls")
            || msg.contains("ssl")
        {
            return true;
        }
        current = err.source();
    }
    false
}

// Note: exercising classify_request_error against real reqwest::Error values
// requires a live socket to fail against; see tests/probe_resolution.rs for
// the failure-path coverage via the scripted requester.
