//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! items = "data/items.csv"            # Catalog rows, one page each
//! redirects = "data/redirects.csv"    # Optional old_slug,new_slug pairs
//! affiliates = "config/affiliates.json"
//! templates = "templates"             # page.html + index.html
//! output = "dist"
//! clean = true                        # Remove stale files before writing
//! ```

use crate::utils::path::resolve_against;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Input and output locations of a build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Items CSV (required at build time).
    pub items: PathBuf,

    /// Redirects CSV (optional).
    pub redirects: PathBuf,

    /// Affiliate pattern JSON (optional).
    pub affiliates: PathBuf,

    /// Template directory containing `page.html` and `index.html`.
    pub templates: PathBuf,

    /// Output directory.
    pub output: PathBuf,

    /// Empty the output directory before writing.
    pub clean: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            items: "data/items.csv".into(),
            redirects: "data/redirects.csv".into(),
            affiliates: "config/affiliates.json".into(),
            templates: "templates".into(),
            output: "dist".into(),
            clean: true,
        }
    }
}

impl BuildSectionConfig {
    /// Resolve every relative path against the project root.
    pub fn normalize(&mut self, root: &Path) {
        self.items = resolve_against(root, &self.items);
        self.redirects = resolve_against(root, &self.redirects);
        self.affiliates = resolve_against(root, &self.affiliates);
        self.templates = resolve_against(root, &self.templates);
        self.output = resolve_against(root, &self.output);
    }
}
