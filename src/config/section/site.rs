//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "AutoSpec"
//! description = "Specs, compatibility and standards"
//! url = "https://example.github.io"
//! language = "en"
//! ads_txt = "google.com, pub-0000000000000000, DIRECT, f08c47fec0942fa0"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Field paths for diagnostic messages.
pub struct SiteSectionFields {
    pub title: FieldPath,
    pub url: FieldPath,
}

/// Site metadata shared by every rendered page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title, also the JSON-LD author name.
    pub title: String,

    /// Site description used on the index page.
    pub description: String,

    /// Author name exposed to templates.
    pub author: String,

    /// Language code (e.g., "en", "ko").
    pub language: String,

    /// Public base URL (e.g., "https://example.github.io").
    pub url: String,

    /// Line written to `ads.txt`; the file is skipped when unset.
    pub ads_txt: Option<String>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: "AutoSpec".into(),
            description: "Specs, compatibility and standards".into(),
            author: String::new(),
            language: "en".into(),
            url: "https://example.com".into(),
            ads_txt: None,
        }
    }
}

impl SiteSectionConfig {
    pub const FIELDS: SiteSectionFields = SiteSectionFields {
        title: FieldPath::new("site.title"),
        url: FieldPath::new("site.url"),
    };

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title` is not empty
    /// - `url` is a valid http(s) URL with a host and no query/fragment
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "site title must not be empty");
        }

        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
                if parsed.query().is_some() || parsed.fragment().is_some() {
                    diag.error(Self::FIELDS.url, "URL must not carry a query or fragment");
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_site_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.title, "AutoSpec");
        assert_eq!(config.site.language, "en");
        assert!(config.site.ads_txt.is_none());
    }

    #[test]
    fn test_base_url_trims_slash() {
        let config = test_parse_config("[site]\nurl = \"https://rinosene.github.io/\"");
        assert_eq!(config.site.base_url(), "https://rinosene.github.io");
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let config = test_parse_config("[site]\nurl = \"ftp://example.com\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, SiteSectionConfig::FIELDS.url);
    }

    #[test]
    fn test_validate_rejects_unparsable_url() {
        let config = test_parse_config("[site]\nurl = \"not a url\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_accepts_subpath() {
        let config = test_parse_config("[site]\nurl = \"https://example.github.io/catalog\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(!diag.has_errors());
    }
}
