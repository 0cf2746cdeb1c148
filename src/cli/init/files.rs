//! Starter files written by `autospec init`.

use crate::{
    config::CONFIG_FILE,
    embed::init::{AFFILIATES_JSON, CONFIG_TOML, ConfigVars, INDEX_HTML, ITEMS_CSV, PAGE_HTML},
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Ignore patterns for a new project.
const IGNORE_PATTERNS: &[&str] = &["/dist/", ".DS_Store"];

/// Commented `autospec.toml`.
pub fn config_template() -> String {
    CONFIG_TOML.render(&ConfigVars::default())
}

pub fn write_config(root: &Path) -> Result<()> {
    write_new(&root.join(CONFIG_FILE), &config_template())
}

/// Sample items, affiliate patterns and the two page templates.
pub fn write_starter_files(root: &Path) -> Result<()> {
    let files = [
        ("data/items.csv", ITEMS_CSV),
        ("config/affiliates.json", AFFILIATES_JSON),
        ("templates/page.html", PAGE_HTML),
        ("templates/index.html", INDEX_HTML),
    ];
    for (path, content) in files {
        write_new(&root.join(path), content)?;
    }
    Ok(())
}

/// `.gitignore` listing the output directory; an existing file is kept.
pub fn write_ignore_file(root: &Path) -> Result<()> {
    let mut content = IGNORE_PATTERNS.join("\n");
    content.push('\n');
    write_new(&root.join(".gitignore"), &content)
}

/// Write `content` unless `path` already exists.
fn write_new(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path()).unwrap();

        let content = fs::read_to_string(temp.path().join(CONFIG_FILE)).unwrap();
        assert!(content.contains("[site]"));
        assert!(content.contains("[ping]"));
    }

    #[test]
    fn test_write_ignore_file() {
        let temp = TempDir::new().unwrap();
        write_ignore_file(temp.path()).unwrap();

        let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert!(content.lines().any(|l| l == "/dist/"));
    }

    #[test]
    fn test_existing_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_file(temp.path()).unwrap();

        assert_eq!(fs::read_to_string(&gitignore).unwrap(), "custom content");
    }
}
