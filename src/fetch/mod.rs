//! Production HTTP requester backed by `reqwest`.

use std::sync::Arc;

use log::debug;

use crate::error_handling::{classify_request_error, FailureKind};
use crate::probe::{HttpRequester, HttpResponse, RequestMethod};

/// [`HttpRequester`] implementation over a shared `reqwest::Client`.
///
/// The client carries the per-request timeout, redirect policy and
/// User-Agent (see [`crate::initialization::init_client`]); this type only
/// translates between the probe's vocabulary and reqwest's.
pub struct ReqwestRequester {
    client: Arc<reqwest::Client>,
}

impl ReqwestRequester {
    /// Wraps a configured client.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        ReqwestRequester { client }
    }
}

impl HttpRequester for ReqwestRequester {
    async fn execute(&self, method: RequestMethod, url: &str) -> Result<HttpResponse, FailureKind> {
        let builder = match method {
            RequestMethod::Head => self.client.head(url),
            RequestMethod::Get => self.client.get(url),
        };

        // Malformed URLs (from malformed names) error out at send() and are
        // absorbed like any other failure; the probe never rejects a name.
        match builder.send().await {
            Ok(response) => {
                let status = response.status();
                Ok(HttpResponse {
                    status_code: status.as_u16(),
                    status_reason: status.canonical_reason().map(str::to_string),
                    response_url: response.url().to_string(),
                })
            }
            Err(e) => {
                let kind = classify_request_error(&e);
                debug!("{method} {url} failed: {e} -> {kind}");
                Err(kind)
            }
        }
    }
}
