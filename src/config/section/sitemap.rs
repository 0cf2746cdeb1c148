//! `[sitemap]` section configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sitemap `<changefreq>` value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Change frequency hint for every URL.
    pub changefreq: ChangeFreq,
    /// Priority of the index page.
    pub index_priority: f32,
    /// Priority of item pages.
    pub page_priority: f32,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            changefreq: ChangeFreq::Weekly,
            index_priority: 0.8,
            page_priority: 0.6,
        }
    }
}

impl SitemapConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in [
            (FieldPath::new("sitemap.index_priority"), self.index_priority),
            (FieldPath::new("sitemap.page_priority"), self.page_priority),
        ] {
            if !(0.0..=1.0).contains(&value) {
                diag.error_with_hint(
                    field,
                    format!("priority {value} is out of range"),
                    "use a value between 0.0 and 1.0",
                );
            }
        }
    }
}
