//! Build pipeline phases: load, timestamp, generate.

use crate::{
    config::SiteConfig,
    data::{AffiliateConfig, Item, Redirect, load_items, load_redirects},
    debug,
    generator::{SiteOutput, crawler, redirect::render_redirects, sitemap::Sitemap},
    logger::ProgressLine,
    render::{IndexContext, PageContext, Renderer, SiteContext},
    utils::date::DateTimeUtc,
};
use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;
use std::{fs, path::Path};

/// Every input of a build, fully loaded.
pub(super) struct Inputs {
    pub items: Vec<Item>,
    pub affiliates: AffiliateConfig,
    pub redirects: Vec<Redirect>,
    pub renderer: Renderer,
}

/// Counts reported after a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub redirects: usize,
    pub ads_txt: bool,
}

/// Load items, affiliate patterns, redirects and templates.
pub(super) fn load_inputs(config: &SiteConfig) -> Result<Inputs> {
    let build = &config.build;

    let items = load_items(&build.items)?;
    let affiliates = AffiliateConfig::load(&build.affiliates)?;
    let redirects = load_redirects(&build.redirects)?;
    let renderer = Renderer::load(&build.templates)?;

    debug!(
        "build";
        "loaded {} items, {} affiliate patterns, {} redirects",
        items.len(),
        affiliates.len(),
        redirects.len()
    );

    Ok(Inputs {
        items,
        affiliates,
        redirects,
        renderer,
    })
}

/// Resolve the build timestamp.
///
/// `SOURCE_DATE_EPOCH` wins when set; otherwise the items file mtime is
/// used, so an unchanged input reproduces the same output.
pub(super) fn build_timestamp(items: &Path, source_date_epoch: Option<&str>) -> Result<DateTimeUtc> {
    if let Some(epoch) = source_date_epoch.map(str::trim).filter(|s| !s.is_empty()) {
        let secs: u64 = epoch
            .parse()
            .with_context(|| format!("SOURCE_DATE_EPOCH is not a unix timestamp: `{epoch}`"))?;
        if secs > DateTimeUtc::MAX_UNIX_SECS {
            bail!("SOURCE_DATE_EPOCH is past the year 9999: `{epoch}`");
        }
        return Ok(DateTimeUtc::from_unix_secs(secs));
    }

    let modified = fs::metadata(items)
        .and_then(|m| m.modified())
        .with_context(|| format!("Failed to read modification time of {}", items.display()))?;
    Ok(DateTimeUtc::from_system_time(modified))
}

/// Render every page and auxiliary file in memory.
pub(super) fn generate(
    config: &SiteConfig,
    inputs: &Inputs,
    built_at: DateTimeUtc,
    quiet: bool,
) -> Result<(SiteOutput, BuildSummary)> {
    let site = SiteContext::from_config(config);
    let mut output = SiteOutput::default();

    let progress = ProgressLine::with_quiet(
        &[
            ("pages", inputs.items.len()),
            ("redirects", inputs.redirects.len()),
        ],
        quiet,
    );

    let mut links = Vec::with_capacity(inputs.items.len());
    for item in &inputs.items {
        let affiliate_url = inputs.affiliates.link_for(item)?;
        let ctx = PageContext::new(&site, item, affiliate_url, built_at);
        let html = inputs.renderer.render_page(&ctx)?;

        links.push(ctx.link(item.updated().unwrap_or(built_at)));
        output.push(format!("{}.html", item.slug), html);
        progress.inc("pages");
    }

    let index = IndexContext::new(&site, &links, built_at);
    output.push("index.html", inputs.renderer.render_index(&index)?);

    let page_slugs: FxHashSet<&str> = inputs.items.iter().map(|i| i.slug.as_str()).collect();
    for (path, html) in render_redirects(&site, &inputs.redirects, &page_slugs)? {
        output.push(path, html);
        progress.inc("redirects");
    }

    let ads_txt = crawler::ads_txt(config);
    let has_ads_txt = ads_txt.is_some();
    if let Some(ads) = ads_txt {
        output.push("ads.txt", ads);
    }
    output.push("robots.txt", crawler::robots_txt(config));

    let sitemap = Sitemap::build(&config.sitemap, site.url.as_str(), built_at, &links);
    output.push("sitemap.xml", sitemap.into_xml());

    progress.finish();

    let summary = BuildSummary {
        pages: inputs.items.len(),
        redirects: inputs.redirects.len(),
        ads_txt: has_ads_txt,
    };
    Ok((output, summary))
}

/// Refuse to clean a directory that contains the project itself.
pub(super) fn check_output_dir(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;
    if config.build.clean && config.get_root().starts_with(output) {
        bail!(
            "refusing to clean `{}`: it contains the project root",
            output.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_from_epoch() {
        let ts = build_timestamp(Path::new("missing.csv"), Some("1700000000")).unwrap();
        assert_eq!(ts.to_rfc3339(), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_timestamp_blank_epoch_uses_mtime() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let ts = build_timestamp(temp.path(), Some("  ")).unwrap();
        assert!(ts.year >= 2024);
    }

    #[test]
    fn test_timestamp_invalid_epoch() {
        assert!(build_timestamp(Path::new("missing.csv"), Some("yesterday")).is_err());
    }

    #[test]
    fn test_timestamp_epoch_range() {
        let last = build_timestamp(Path::new("missing.csv"), Some("253402300799")).unwrap();
        assert_eq!(last.to_rfc3339(), "9999-12-31T23:59:59Z");
        assert!(build_timestamp(Path::new("missing.csv"), Some("253402300800")).is_err());
        assert!(build_timestamp(Path::new("missing.csv"), Some("18446744073709551615")).is_err());
    }

    #[test]
    fn test_timestamp_missing_file() {
        assert!(build_timestamp(Path::new("/nonexistent/items.csv"), None).is_err());
    }

    #[test]
    fn test_check_output_dir_rejects_root() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut config = crate::config::test_config_at(temp.path(), "");
        config.build.output = temp.path().to_path_buf();
        assert!(check_output_dir(&config).is_err());

        config.build.clean = false;
        assert!(check_output_dir(&config).is_ok());
    }
}
