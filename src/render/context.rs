//! Template contexts for `page.html` and `index.html`.
//!
//! Both contexts serialize to a flat map; Tera sees each field as a
//! top-level variable.

use crate::{
    config::SiteConfig,
    data::Item,
    utils::{date::DateTimeUtc, link::join_url},
};
use serde::Serialize;
use serde_json::json;

/// Site metadata exposed to templates as `site`.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContext {
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub url: String,
}

impl SiteContext {
    pub fn from_config(config: &SiteConfig) -> Self {
        let site = &config.site;
        Self {
            title: site.title.clone(),
            description: site.description.clone(),
            author: site.author.clone(),
            language: site.language.clone(),
            url: site.base_url().to_string(),
        }
    }

    /// Absolute URL for a site-relative path, percent-encoded.
    pub fn url_for(&self, path: &str) -> String {
        join_url(&self.url, path)
    }
}

/// Entry in the index listing and the sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub title: String,
    pub description: String,
    /// Site-relative path (`{slug}.html`).
    pub path: String,
    pub slug: String,
    #[serde(skip)]
    pub lastmod: DateTimeUtc,
}

/// Context for one item page.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext<'a> {
    pub site: &'a SiteContext,
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub schema_json: String,
    pub year: u16,
    pub h1: String,
    pub subtitle: String,
    pub body_paragraph: String,
    pub faq_q1: String,
    pub faq_a1: String,
    pub faq_q2: String,
    pub faq_a2: String,
    pub item: &'a Item,
    pub slug: &'a str,
    pub affiliate_url: String,
    pub updated: String,
}

impl<'a> PageContext<'a> {
    /// Build the context for `item`; `built_at` is used when the row has
    /// no `updated` column.
    pub fn new(
        site: &'a SiteContext,
        item: &'a Item,
        affiliate_url: String,
        built_at: DateTimeUtc,
    ) -> Self {
        let title = item.title();
        let description = item.description();
        let canonical = site.url_for(&format!("{}.html", item.slug));
        let modified = item.updated().unwrap_or(built_at);

        let schema = json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": title,
            "description": description,
            "mainEntityOfPage": { "@type": "WebPage", "@id": canonical },
            "author": { "@type": "Person", "name": site.title },
            "dateModified": modified.to_date_string(),
        });

        let entity = item.field("entity");
        let attribute = item.field("attribute");
        let modifier = item.field("modifier");
        let subject = format!("{entity} {attribute}").trim().to_string();

        let mut body_paragraph =
            format!("A quick guide to choosing {entity} by {attribute}.");
        if !modifier.is_empty() {
            body_paragraph.push_str(&format!(" The recommended spec is {modifier}."));
        }
        body_paragraph
            .push_str(" Needs vary, so check the product details before you buy.");

        let pick = if modifier.is_empty() { "this" } else { modifier };

        Self {
            site,
            h1: title.clone(),
            subtitle: description.clone(),
            body_paragraph,
            faq_q1: format!("What does {subject} mean?"),
            faq_a1: format!("{attribute} is one of the defining characteristics of {entity}."),
            faq_q2: format!("Is {pick} the best choice for everyone?"),
            faq_a2: "No. The right choice depends on how and where you use it. \
                     This page is a guide to help you decide."
                .to_string(),
            title,
            description,
            canonical,
            schema_json: to_pretty_json(&schema),
            year: built_at.year,
            item,
            slug: &item.slug,
            affiliate_url,
            updated: modified.to_date_string(),
        }
    }

    /// Listing entry for this page.
    pub fn link(&self, lastmod: DateTimeUtc) -> PageLink {
        PageLink {
            title: self.title.clone(),
            description: self.description.clone(),
            path: format!("{}.html", self.slug),
            slug: self.slug.to_string(),
            lastmod,
        }
    }
}

/// Context for the index page.
#[derive(Debug, Clone, Serialize)]
pub struct IndexContext<'a> {
    pub site: &'a SiteContext,
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub schema_json: String,
    pub year: u16,
    pub updated: String,
    pub pages: &'a [PageLink],
}

impl<'a> IndexContext<'a> {
    pub fn new(site: &'a SiteContext, pages: &'a [PageLink], built_at: DateTimeUtc) -> Self {
        let canonical = format!("{}/", site.url);
        let schema = json!({
            "@context": "https://schema.org",
            "@type": "CollectionPage",
            "name": site.title,
            "url": canonical,
        });

        Self {
            site,
            title: site.title.clone(),
            description: site.description.clone(),
            canonical,
            schema_json: to_pretty_json(&schema),
            year: built_at.year,
            updated: built_at.to_date_string(),
            pages,
        }
    }
}

/// Pretty JSON that is safe inside `<script>`: `<` becomes `\u003c`, so a
/// field containing `</script>` cannot close the block.
fn to_pretty_json(value: &serde_json::Value) -> String {
    // `Value` always serializes.
    serde_json::to_string_pretty(value)
        .unwrap_or_default()
        .replace('<', "\\u003c")
}
