//! Embedded static resources.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `build` - Build-time templates (redirect.html)
//! - `init` - Starter project files written by `autospec init`
//!
//! # Usage
//!
//! ```ignore
//! use embed::build::{REDIRECT_HTML, RedirectVars};
//!
//! let html = REDIRECT_HTML.render(&RedirectVars {
//!     target_url: "https://example.com/new.html",
//!     language: "en",
//! });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod build {
    use super::{Template, TemplateVars};
    use crate::utils::xml::escape_xml;

    /// Variables for redirect.html template.
    pub struct RedirectVars<'a> {
        pub target_url: &'a str,
        pub language: &'a str,
    }

    impl TemplateVars for RedirectVars<'_> {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__TARGET_URL__", &escape_xml(self.target_url))
                .replace("__LANG__", &escape_xml(self.language))
        }
    }

    /// Soft redirect page for renamed slugs.
    pub const REDIRECT_HTML: Template<RedirectVars<'static>> =
        Template::new(include_str!("build/redirect.html"));
}

pub mod init {
    use super::{Template, TemplateVars};

    /// Variables for the starter config.
    pub struct ConfigVars {
        pub version: &'static str,
    }

    impl Default for ConfigVars {
        fn default() -> Self {
            Self {
                version: env!("CARGO_PKG_VERSION"),
            }
        }
    }

    impl TemplateVars for ConfigVars {
        fn apply(&self, content: &str) -> String {
            content.replace("__VERSION__", self.version)
        }
    }

    /// Commented `autospec.toml` with every default spelled out.
    pub const CONFIG_TOML: Template<ConfigVars> = Template::new(include_str!("init/autospec.toml"));

    pub const ITEMS_CSV: &str = include_str!("init/items.csv");
    pub const AFFILIATES_JSON: &str = include_str!("init/affiliates.json");
    pub const PAGE_HTML: &str = include_str!("init/page.html");
    pub const INDEX_HTML: &str = include_str!("init/index.html");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::SiteConfig,
        data::{AffiliateConfig, parse_items},
        render::Renderer,
    };
    use std::path::Path;

    #[test]
    fn test_redirect_template() {
        let html = build::REDIRECT_HTML.render(&build::RedirectVars {
            target_url: "https://e.com/new.html",
            language: "en",
        });
        assert!(html.contains(r#"content="0;url=https://e.com/new.html""#));
        assert!(html.contains(r#"<link rel="canonical" href="https://e.com/new.html">"#));
        assert!(!html.contains("__TARGET_URL__"));
        assert!(!html.contains("__LANG__"));
    }

    #[test]
    fn test_redirect_template_escapes_url() {
        let html = build::REDIRECT_HTML.render(&build::RedirectVars {
            target_url: "https://e.com/a.html?x=\"1\"&y=2",
            language: "en",
        });
        assert!(html.contains("x=&quot;1&quot;&amp;y=2"));
    }

    #[test]
    fn test_config_template_matches_defaults() {
        let content = init::CONFIG_TOML.render(&init::ConfigVars::default());
        assert!(content.contains(env!("CARGO_PKG_VERSION")));

        let parsed = SiteConfig::from_str(&content).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(parsed.site.url, defaults.site.url);
        assert_eq!(parsed.build.output, defaults.build.output);
        assert_eq!(parsed.ping.endpoints, defaults.ping.endpoints);
        assert_eq!(parsed.sitemap.changefreq, defaults.sitemap.changefreq);
    }

    #[test]
    fn test_starter_data_is_consistent() {
        let items = parse_items(init::ITEMS_CSV.as_bytes(), Path::new("items.csv")).unwrap();
        let affiliates =
            AffiliateConfig::parse(init::AFFILIATES_JSON, Path::new("affiliates.json")).unwrap();
        assert_eq!(items.len(), 3);
        for item in &items {
            assert!(!affiliates.link_for(item).unwrap().is_empty());
        }
    }

    #[test]
    fn test_starter_templates_parse() {
        assert!(Renderer::from_sources(init::PAGE_HTML, init::INDEX_HTML).is_ok());
    }
}
