//! Crawler-facing text files: `robots.txt` and `ads.txt`.

use crate::config::SiteConfig;

/// `robots.txt` allowing everything and pointing at the sitemap.
pub fn robots_txt(config: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml\n",
        config.site.base_url()
    )
}

/// `ads.txt` body, `None` when no line is configured.
///
/// `ADS_TXT_LINE` has already been folded into `site.ads_txt` by the
/// config loader.
pub fn ads_txt(config: &SiteConfig) -> Option<String> {
    let line = config.site.ads_txt.as_deref()?.trim();
    (!line.is_empty()).then(|| format!("{line}\n"))
}
