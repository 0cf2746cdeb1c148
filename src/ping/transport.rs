//! HTTP transport used by the pinger.

use anyhow::{Context, Result};
use std::time::Duration;

/// Issues a GET and returns the response status.
///
/// Transport errors (DNS, connect, timeout) are returned as text so they can
/// be reported next to the endpoint instead of aborting the run.
pub trait Transport {
    fn get(&self, url: &str) -> std::result::Result<u16, String>;
}

/// Blocking reqwest client with a fixed timeout.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("autospec/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> std::result::Result<u16, String> {
        self.client
            .get(url)
            .send()
            .map(|resp| resp.status().as_u16())
            .map_err(|e| describe(&e))
    }
}

/// Short reason for a failed request.
fn describe(err: &reqwest::Error) -> String {
    let kind = if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connection failed"
    } else if err.is_builder() {
        "invalid url"
    } else {
        "request failed"
    };
    match std::error::Error::source(err) {
        Some(source) => format!("{kind}: {source}"),
        None => kind.to_string(),
    }
}
