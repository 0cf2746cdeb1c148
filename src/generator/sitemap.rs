//! Sitemap generation.
//!
//! Lists the index page followed by every item page. Redirect sources are
//! never listed.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01T00:00:00Z</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.8</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::{ChangeFreq, SitemapConfig},
    render::PageLink,
    utils::{date::DateTimeUtc, link::join_url, xml::escape_xml},
};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: DateTimeUtc,
    changefreq: ChangeFreq,
    priority: f32,
}

impl Sitemap {
    /// Collect the index and every page under `base_url`.
    pub fn build(
        config: &SitemapConfig,
        base_url: &str,
        built_at: DateTimeUtc,
        pages: &[PageLink],
    ) -> Self {
        let index = UrlEntry {
            loc: format!("{base_url}/"),
            lastmod: built_at,
            changefreq: config.changefreq,
            priority: config.index_priority,
        };

        let urls = std::iter::once(index)
            .chain(pages.iter().map(|page| UrlEntry {
                loc: join_url(base_url, &page.path),
                lastmod: page.lastmod,
                changefreq: config.changefreq,
                priority: config.page_priority,
            }))
            .collect();

        Self { urls }
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 192);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&entry.lastmod.to_rfc3339());
            xml.push_str("</lastmod>\n    <changefreq>");
            xml.push_str(entry.changefreq.as_str());
            xml.push_str("</changefreq>\n    <priority>");
            xml.push_str(&format!("{:.1}", entry.priority));
            xml.push_str("</priority>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}
