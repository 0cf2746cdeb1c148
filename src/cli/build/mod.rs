//! Site building orchestration.
//!
//! Build pipeline phases:
//! - **Load** - Items CSV, affiliate patterns, redirects, templates
//! - **Timestamp** - `SOURCE_DATE_EPOCH` or the items file mtime
//! - **Generate** - Pages, index, redirects, crawler files, sitemap (in memory)
//! - **Write** - Clean and fill the output directory
//!
//! Nothing is written until generation has fully succeeded.

mod pipeline;

use anyhow::Result;

use crate::{config::SiteConfig, log, utils::plural_count};

pub use pipeline::BuildSummary;

/// Build the entire site.
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<BuildSummary> {
    let inputs = pipeline::load_inputs(config)?;

    let epoch = std::env::var("SOURCE_DATE_EPOCH").ok();
    let built_at = pipeline::build_timestamp(&config.build.items, epoch.as_deref())?;

    let (site, summary) = pipeline::generate(config, &inputs, built_at, quiet)?;

    pipeline::check_output_dir(config)?;
    site.write(&config.build.output, config.build.clean)?;

    if !quiet {
        log_summary(config, &summary);
    }
    Ok(summary)
}

fn log_summary(config: &SiteConfig, summary: &BuildSummary) {
    let mut parts = vec![plural_count(summary.pages + 1, "page")];
    if summary.redirects > 0 {
        parts.push(plural_count(summary.redirects, "redirect"));
    }
    if summary.ads_txt {
        parts.push("ads.txt".into());
    }
    log!(
        "build";
        "{} written to {}",
        parts.join(", "),
        config.build.output.display()
    );
}
