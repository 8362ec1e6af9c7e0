//! The domain resolution probe.
//!
//! Turns one name into one final [`DomainOutcome`] by trying each candidate
//! URL in sequence: HEAD first, escalating once to GET on a 405, merging each
//! attempt into the running outcome and stopping at the first 200.
//!
//! The probe is deliberately sequential. The names come from crawl indexes in
//! large batches against rate-limited servers, and the serialized, polite
//! pacing is a feature; no request for a candidate starts before the previous
//! candidate's attempt (including its possible escalation) has finished.
//!
//! The HTTP side lives behind [`HttpRequester`] so that resolution logic can
//! be exercised against scripted responses without a network.

pub mod outcome;


use crate::candidates::{generate_candidates, Candidate};
use crate::config::{CandidateOrder, HTTP_STATUS_METHOD_NOT_ALLOWED};
use crate::error_handling::FailureKind;

pub use outcome::{DomainOutcome, HttpResponse, RequestMethod};

/// Abstract HTTP collaborator for the probe.
///
/// One method: issue a request, report either the response status line and
/// final URL or a classified failure. Implementations never panic and never
/// surface errors beyond `FailureKind`; the production implementation is
/// [`crate::ReqwestRequester`].
#[allow(async_fn_in_trait)]
pub trait HttpRequester {
    /// Issues one request and reports the response or a classified failure.
    async fn execute(&self, method: RequestMethod, url: &str) -> Result<HttpResponse, FailureKind>;
}

/// Resolves names to outcomes through an [`HttpRequester`].
pub struct Resolver<R> {
    requester: R,
    order: CandidateOrder,
}

impl<R: HttpRequester> Resolver<R> {
    /// Creates a resolver over `requester` with the given candidate order.
    pub fn new(requester: R, order: CandidateOrder) -> Self {
        Resolver { requester, order }
    }

    /// Resolves one name to its final outcome.
    ///
    /// Never fails: request errors are absorbed into the outcome as
    /// `exception_kind` values, and a name whose every candidate fails is
    /// recorded with the first failure seen.
    pub async fn resolve(&self, name: &str) -> DomainOutcome {
        let name = name.trim();
        let mut candidates = generate_candidates(name, self.order).into_iter();

        // The generator always yields at least the bare-host candidates.
        let Some(first) = candidates.next() else {
            return DomainOutcome::failure(name, "", RequestMethod::Head, FailureKind::Other);
        };

        let mut outcome = self.try_candidate(name, first).await;
        for candidate in candidates {
            if outcome.is_live() {
                break;
            }
            let attempt = self.try_candidate(name, candidate).await;
            outcome = outcome.prefer(attempt);
        }
        outcome
    }

    /// One candidate: a HEAD attempt, replaced wholesale by a GET attempt if
    /// the server answered 405. The escalation happens at most once; a GET
    /// that also returns 405 stands as-is.
    async fn try_candidate(&self, name: &str, candidate: Candidate) -> DomainOutcome {
        let url = candidate.url(name);
        let mut attempt = self.attempt(name, &url, RequestMethod::Head).await;
        if attempt.status_code == Some(HTTP_STATUS_METHOD_NOT_ALLOWED) {
            attempt = self.attempt(name, &url, RequestMethod::Get).await;
        }
        attempt
    }

    async fn attempt(&self, name: &str, url: &str, method: RequestMethod) -> DomainOutcome {
        let attempt = match self.requester.execute(method, url).await {
            Ok(response) => DomainOutcome::response(name, url, method, response),
            Err(kind) => DomainOutcome::failure(name, url, method, kind),
        };
        attempt.log();
        attempt
    }
}
