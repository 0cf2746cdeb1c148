//! `autospec ping`: submit the sitemap URL to search engines.

use crate::{
    config::SiteConfig,
    debug, log,
    ping::{HttpTransport, PingReport, Transport, ping_all},
    utils::plural_count,
};
use anyhow::{Result, bail};
use std::time::Duration;

/// Ping every configured endpoint and log one line per endpoint.
///
/// Fails only when `strict` is set and no endpoint succeeded.
pub fn ping_sitemap(config: &SiteConfig, strict: bool) -> Result<PingReport> {
    let transport = HttpTransport::new(Duration::from_secs(config.ping.timeout_secs))?;
    run(&transport, config, strict)
}

fn run(transport: &impl Transport, config: &SiteConfig, strict: bool) -> Result<PingReport> {
    let sitemap_url = config.sitemap_url();
    if config.ping.endpoints.is_empty() {
        log!("ping"; "no endpoints configured");
        return Ok(PingReport::default());
    }

    debug!("ping"; "sitemap {}", sitemap_url);
    let report = ping_all(transport, &config.ping.endpoints, &sitemap_url);

    for result in &report.results {
        let module = if result.is_ok() { "ping" } else { "fail" };
        log!(module; "{} {}", result.outcome, result.url);
    }
    log!(
        "ping";
        "{} of {} ok, {} failed",
        report.succeeded(),
        plural_count(report.results.len(), "endpoint"),
        report.failed()
    );

    if strict && report.all_failed() {
        bail!("every sitemap ping failed");
    }
    Ok(report)
}
