//! Outcome value types for the resolution probe.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::config::HTTP_STATUS_OK;
use crate::error_handling::FailureKind;

/// HTTP request method used for an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestMethod {
    /// HEAD, the first attempt for every candidate
    Head,
    /// GET, used only after a HEAD answered 405
    Get,
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestMethod::Head => write!(f, "head"),
            RequestMethod::Get => write!(f, "get"),
        }
    }
}

/// Response details from a completed request: the status line plus the URL
/// the client ended up at after redirects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status_code: u16,
    /// Status reason phrase, when the client knows one
    pub status_reason: Option<String>,
    /// URL the client ended up at after redirects
    pub response_url: String,
}

/// The best-known result for a name.
///
/// Exactly one of `exception_kind` and `status_code` is populated: an outcome
/// either records a response (whatever the numeric status) or records why no
/// response could be obtained. Outcomes are immutable values; candidate
/// attempts are combined with [`DomainOutcome::prefer`], which returns the
/// preferred of two outcomes rather than patching fields in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DomainOutcome {
    /// The input name this outcome belongs to
    pub name: String,
    /// The URL the request was made to
    pub request_url: String,
    /// The request method that produced this outcome
    pub request_type: RequestMethod,
    /// Failure classification, when no response was obtained
    pub exception_kind: Option<FailureKind>,
    /// HTTP status code from the response
    pub status_code: Option<u16>,
    /// HTTP status reason phrase from the response
    pub status_reason: Option<String>,
    /// URL from the response, after redirects
    pub response_url: Option<String>,
}

impl DomainOutcome {
    /// Outcome for an attempt that got a response.
    pub fn response(
        name: &str,
        request_url: &str,
        request_type: RequestMethod,
        response: HttpResponse,
    ) -> Self {
        DomainOutcome {
            name: name.to_string(),
            request_url: request_url.to_string(),
            request_type,
            exception_kind: None,
            status_code: Some(response.status_code),
            status_reason: response.status_reason,
            response_url: Some(response.response_url),
        }
    }

    /// Outcome for an attempt that failed without a response.
    pub fn failure(
        name: &str,
        request_url: &str,
        request_type: RequestMethod,
        kind: FailureKind,
    ) -> Self {
        DomainOutcome {
            name: name.to_string(),
            request_url: request_url.to_string(),
            request_type,
            exception_kind: Some(kind),
            status_code: None,
            status_reason: None,
            response_url: None,
        }
    }

    /// Whether this outcome is a 200 response, the terminal state of the
    /// resolution: once recorded, no later candidate may overwrite it.
    pub fn is_live(&self) -> bool {
        self.status_code == Some(HTTP_STATUS_OK)
    }

    /// The merge rule: picks between the running outcome (`self`) and a new
    /// candidate attempt.
    ///
    /// A 200 always wins. A response, however unsuccessful, beats a failure.
    /// Everything else keeps the running outcome, so a non-200 status is
    /// never displaced by another non-200, and the first failure is retained
    /// over later failures.
    pub fn prefer(self, new: DomainOutcome) -> DomainOutcome {
        if new.is_live() {
            return new;
        }
        if self.status_code.is_none() && new.status_code.is_some() {
            return new;
        }
        self
    }

    /// Diagnostic logging of one attempt or final outcome.
    pub fn log(&self) {
        match (self.exception_kind, self.status_code) {
            (Some(kind), _) => {
                debug!(
                    "{}: {} {} -> {}",
                    self.name, self.request_type, self.request_url, kind
                );
            }
            (None, Some(code)) => {
                debug!(
                    "{}: {} {} -> {} {} ({})",
                    self.name,
                    self.request_type,
                    self.request_url,
                    code,
                    self.status_reason.as_deref().unwrap_or(""),
                    self.response_url.as_deref().unwrap_or("")
                );
            }
            (None, None) => {
                // Constructors never produce this shape.
                debug!(
                    "{}: {} {} -> no result",
                    self.name, self.request_type, self.request_url
                );
            }
        }
    }
}
