//! Configuration constants.
//!
//! Timeouts, limits, and default values used throughout the application.

/// Per-request timeout in seconds (socket connect + read combined).
///
/// Applied identically to HEAD and GET attempts. There is no whole-name
/// time limit beyond the sum of the per-request timeouts.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Maximum number of redirect hops to follow.
/// Prevents infinite redirect loops and excessive request chains.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Default User-Agent string for HTTP requests.
///
/// Mimics Chrome on macOS so that sites screening for scrapers still answer.
/// Can be overridden via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// HTTP status codes (for clarity and consistency)
/// The terminal "live" status: stops candidate iteration.
pub const HTTP_STATUS_OK: u16 = 200;
/// Triggers the single HEAD-to-GET escalation.
pub const HTTP_STATUS_METHOD_NOT_ALLOWED: u16 = 405;
