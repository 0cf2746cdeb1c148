//! `[ping]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [ping]
//! endpoints = [
//!     "https://www.google.com/ping?sitemap=",
//!     "https://www.bing.com/ping?sitemap=",
//! ]
//! timeout_secs = 10
//! ```
//!
//! Each endpoint is a URL prefix; the form-encoded sitemap URL is appended.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Search engine ping settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PingConfig {
    /// Endpoint prefixes, pinged in order.
    pub endpoints: Vec<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Sitemap URL to submit. Defaults to `{site.url}/sitemap.xml`.
    pub sitemap_url: Option<String>,
}

impl Default for PingConfig {
    fn default() -> Self {
        Self {
            endpoints: vec![
                "https://www.google.com/ping?sitemap=".into(),
                "https://www.bing.com/ping?sitemap=".into(),
            ],
            timeout_secs: 10,
            sitemap_url: None,
        }
    }
}

impl PingConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.timeout_secs == 0 {
            diag.error_with_hint(
                FieldPath::new("ping.timeout_secs"),
                "timeout must be greater than zero",
                "the default is 10",
            );
        }

        for endpoint in &self.endpoints {
            if url::Url::parse(endpoint).is_err() {
                diag.error_with_hint(
                    FieldPath::new("ping.endpoints"),
                    format!("invalid endpoint URL: {endpoint}"),
                    "use format like https://www.bing.com/ping?sitemap=",
                );
            }
        }

        if let Some(sitemap) = &self.sitemap_url
            && url::Url::parse(sitemap).is_err()
        {
            diag.error(
                FieldPath::new("ping.sitemap_url"),
                format!("invalid sitemap URL: {sitemap}"),
            );
        }
    }
}
