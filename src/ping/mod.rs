//! Sitemap ping: notify search engines that the sitemap changed.
//!
//! Each endpoint is a URL prefix such as `https://www.bing.com/ping?sitemap=`;
//! the form-urlencoded sitemap URL is appended and fetched with a GET.
//! Failures are collected per endpoint and never stop the remaining pings.

mod transport;

pub use transport::{HttpTransport, Transport};

use std::fmt;

/// Result of pinging one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 2xx/3xx response.
    Ok(u16),
    /// Error response or transport failure.
    Fail(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(status) => write!(f, "ok {status}"),
            Self::Fail(reason) => write!(f, "fail {reason}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResult {
    /// Full request URL.
    pub url: String,
    pub outcome: Outcome,
}

impl EndpointResult {
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, Outcome::Ok(_))
    }
}

/// Outcome of a ping run, in endpoint order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PingReport {
    pub results: Vec<EndpointResult>,
}

impl PingReport {
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    /// True when there was at least one endpoint and none succeeded.
    pub fn all_failed(&self) -> bool {
        !self.results.is_empty() && self.succeeded() == 0
    }
}

/// `{endpoint}{form-urlencoded sitemap}`.
pub fn ping_url(endpoint: &str, sitemap_url: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(sitemap_url.as_bytes()).collect();
    format!("{endpoint}{encoded}")
}

/// Ping every endpoint in order.
pub fn ping_all(transport: &impl Transport, endpoints: &[String], sitemap_url: &str) -> PingReport {
    let results = endpoints
        .iter()
        .map(|endpoint| {
            let url = ping_url(endpoint, sitemap_url);
            let outcome = match transport.get(&url) {
                Ok(status) if status < 400 => Outcome::Ok(status),
                Ok(status) => Outcome::Fail(format!("HTTP {status}")),
                Err(reason) => Outcome::Fail(reason),
            };
            EndpointResult { url, outcome }
        })
        .collect();

    PingReport { results }
}
