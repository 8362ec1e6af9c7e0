//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS};

/// Initializes the HTTP client used for all probe requests.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration (browser-like by default, so
///   that sites screening for scrapers still answer)
/// - Per-request timeout covering connect and read
/// - Redirect following enabled, capped at `MAX_REDIRECT_HOPS`
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub async fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(Arc::new(client))
}
