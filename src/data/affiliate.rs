//! Affiliate link patterns from `config/affiliates.json`.
//!
//! Keys are merchant names matched against the row's `merchant` column.
//! Two shapes are accepted:
//!
//! ```json
//! {
//!   "acme": "https://aff.example/{id}",
//!   "amazon": {
//!     "deeplink_base": "https://amazon.com/dp/{slug}",
//!     "utm": "tag=autospec-20"
//!   }
//! }
//! ```
//!
//! `{name}` placeholders are filled from the row. `{slug}` is the page slug
//! and `{id}` is the `id` column, falling back to the slug.

use super::{DataError, Item};
use crate::debug;
use regex::{Captures, Regex};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::{fs, path::Path, sync::LazyLock};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder regex is valid"));

/// URL template for one merchant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AffiliatePattern {
    /// Plain URL template.
    Template(String),
    /// Deep link base plus a tracking query appended with `?` or `&`.
    Deeplink {
        deeplink_base: String,
        #[serde(default)]
        utm: Option<String>,
    },
}

impl AffiliatePattern {
    /// Expand placeholders for `item`.
    ///
    /// An empty template yields an empty link.
    pub fn expand(&self, merchant: &str, item: &Item) -> Result<String, DataError> {
        match self {
            Self::Template(template) => fill(template, merchant, item),
            Self::Deeplink { deeplink_base, utm } => {
                let base = fill(deeplink_base, merchant, item)?;
                match utm.as_deref().map(str::trim) {
                    Some(utm) if !base.is_empty() && !utm.is_empty() => {
                        let sep = if base.contains('?') { '&' } else { '?' };
                        Ok(format!("{base}{sep}{utm}"))
                    }
                    _ => Ok(base),
                }
            }
        }
    }
}

/// All merchant patterns.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AffiliateConfig {
    patterns: FxHashMap<String, AffiliatePattern>,
}

impl AffiliateConfig {
    /// Load patterns; a missing file means no affiliate links.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        if !path.exists() {
            debug!("affiliate"; "no config at {}, links disabled", path.display());
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).map_err(|e| DataError::Io(path.to_path_buf(), e))?;
        Self::parse(&content, path)
    }

    /// Parse patterns from JSON text; `source` is only used in errors.
    pub fn parse(content: &str, source: &Path) -> Result<Self, DataError> {
        serde_json::from_str(content).map_err(|e| DataError::Affiliate {
            path: source.to_path_buf(),
            source: e,
        })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Affiliate URL for an item, empty when its merchant has no pattern.
    pub fn link_for(&self, item: &Item) -> Result<String, DataError> {
        let merchant = item.field("merchant");
        match self.patterns.get(merchant) {
            Some(pattern) => pattern.expand(merchant, item),
            None => Ok(String::new()),
        }
    }
}

/// Replace every `{name}` in `template` with the matching item value.
fn fill(template: &str, merchant: &str, item: &Item) -> Result<String, DataError> {
    let mut missing = None;
    let filled = PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        let name = &caps[1];
        match resolve(name, item) {
            Some(value) => value.to_string(),
            None => {
                missing.get_or_insert_with(|| name.to_string());
                String::new()
            }
        }
    });

    match missing {
        Some(name) => Err(DataError::Placeholder {
            merchant: merchant.to_string(),
            name,
            line: item.line,
        }),
        None => Ok(filled.into_owned()),
    }
}

fn resolve<'a>(name: &str, item: &'a Item) -> Option<&'a str> {
    match name {
        "slug" => Some(item.slug.as_str()),
        "id" => Some(
            item.get("id")
                .filter(|id| !id.is_empty())
                .unwrap_or(item.slug.as_str()),
        ),
        _ => item.get(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn item(pairs: &[(&str, &str)]) -> Item {
        let fields = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Item::new(2, fields).unwrap()
    }

    fn config(json: &str) -> AffiliateConfig {
        AffiliateConfig::parse(json, Path::new("affiliates.json")).unwrap()
    }

    #[test]
    fn test_id_placeholder() {
        let config = config(r#"{"acme": "https://aff.example/{id}"}"#);
        let item = item(&[("id", "42"), ("merchant", "acme"), ("deeplink_slug", "widget")]);
        assert_eq!(config.link_for(&item).unwrap(), "https://aff.example/42");
    }

    #[test]
    fn test_id_falls_back_to_slug() {
        let config = config(r#"{"acme": "https://aff.example/{id}"}"#);
        let item = item(&[("merchant", "acme"), ("deeplink_slug", "widget")]);
        assert_eq!(config.link_for(&item).unwrap(), "https://aff.example/widget");
    }

    #[test]
    fn test_deeplink_with_utm() {
        let config = config(
            r#"{"amazon": {"deeplink_base": "https://amazon.com/dp/{slug}", "utm": "tag=x-20"}}"#,
        );
        let item = item(&[("merchant", "amazon"), ("deeplink_slug", "B0ABC")]);
        assert_eq!(
            config.link_for(&item).unwrap(),
            "https://amazon.com/dp/B0ABC?tag=x-20"
        );
    }

    #[test]
    fn test_deeplink_utm_after_existing_query() {
        let config = config(
            r#"{"shop": {"deeplink_base": "https://shop.example/p?sku={sku}", "utm": "ref=as"}}"#,
        );
        let item = item(&[("merchant", "shop"), ("sku", "77"), ("deeplink_slug", "p")]);
        assert_eq!(
            config.link_for(&item).unwrap(),
            "https://shop.example/p?sku=77&ref=as"
        );
    }

    #[test]
    fn test_deeplink_without_utm() {
        let config = config(r#"{"shop": {"deeplink_base": "https://shop.example/{slug}"}}"#);
        let item = item(&[("merchant", "shop"), ("deeplink_slug", "p")]);
        assert_eq!(config.link_for(&item).unwrap(), "https://shop.example/p");
    }

    #[test]
    fn test_unknown_merchant_has_no_link() {
        let config = config(r#"{"acme": "https://aff.example/{id}"}"#);
        let item = item(&[("merchant", "other"), ("deeplink_slug", "p")]);
        assert_eq!(config.link_for(&item).unwrap(), "");
    }

    #[test]
    fn test_unresolved_placeholder_fails() {
        let config = config(r#"{"acme": "https://aff.example/{sku}"}"#);
        let item = item(&[("merchant", "acme"), ("deeplink_slug", "p")]);
        let err = config.link_for(&item).unwrap_err();
        assert!(matches!(err, DataError::Placeholder { ref name, .. } if name == "sku"));
    }

    #[test]
    fn test_malformed_json_fails() {
        let err = AffiliateConfig::parse("{not json", Path::new("a.json")).unwrap_err();
        assert!(matches!(err, DataError::Affiliate { .. }));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let config = AffiliateConfig::load(&temp.path().join("affiliates.json")).unwrap();
        assert_eq!(config.len(), 0);
    }
}
