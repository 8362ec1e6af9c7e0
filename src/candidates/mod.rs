//! Candidate URL generation.
//!
//! For a name like `example.science` there are four plausible endpoints:
//! the bare host and the `www.` host, each over http and https. This module
//! produces that sequence in a configurable order. It is pure: no I/O, no
//! failure modes.

use std::fmt;

use crate::config::CandidateOrder;

/// Subdomain prefix tried in addition to the bare host.
pub const WWW_PREFIX: &str = "www.";

/// URL scheme of a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheme {
    /// `https://`
    Https,
    /// `http://`
    Http,
}

impl Scheme {
    /// The scheme as a URL prefix, e.g. `https://`.
    pub fn as_url_prefix(self) -> &'static str {
        match self {
            Scheme::Https => "https://",
            Scheme::Http => "http://",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Https => write!(f, "https"),
            Scheme::Http => write!(f, "http"),
        }
    }
}

/// One (scheme, subdomain-prefix) combination to try against a name.
///
/// The request URL is the plain concatenation `scheme + prefix + name`,
/// exactly as the names arrive from the crawl indexes; no URL parsing or
/// normalization happens here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// URL scheme to try
    pub scheme: Scheme,
    /// Subdomain prefix, either `""` or `"www."`
    pub subdomain: &'static str,
}

impl Candidate {
    /// Builds the request URL for `name`.
    pub fn url(&self, name: &str) -> String {
        format!("{}{}{}", self.scheme.as_url_prefix(), self.subdomain, name)
    }
}

/// Generates the ordered candidate sequence for `name`.
///
/// Four entries for a bare name; two when the name already starts with
/// `www.`, since prepending the prefix again would produce a `www.www.` host
/// that never existed.
pub fn generate_candidates(name: &str, order: CandidateOrder) -> Vec<Candidate> {
    let schemes = match order {
        CandidateOrder::HttpsFirst => [Scheme::Https, Scheme::Http],
        CandidateOrder::HttpFirst => [Scheme::Http, Scheme::Https],
    };
    let prefixes: &[&'static str] = if name.starts_with(WWW_PREFIX) {
        &[""]
    } else {
        &["", WWW_PREFIX]
    };

    let mut candidates = Vec::with_capacity(schemes.len() * prefixes.len());
    for scheme in schemes {
        for &subdomain in prefixes {
            candidates.push(Candidate { scheme, subdomain });
        }
    }
    candidates
}
