//! Site output generation.
//!
//! Every file of the site is produced in memory first:
//!
//! - **Pages**: rendered item pages and the index (see `render`)
//! - **Redirects**: soft redirect pages (`redirect`)
//! - **Crawler files**: `robots.txt`, `ads.txt` (`crawler`)
//! - **Sitemap**: `sitemap.xml` (`sitemap`)
//!
//! [`SiteOutput::write`] is the only step that touches the output directory.

pub mod crawler;
pub mod redirect;
pub mod sitemap;

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// One generated file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub contents: String,
}

/// The complete generated site.
#[derive(Debug, Default)]
pub struct SiteOutput {
    files: Vec<OutputFile>,
}

impl SiteOutput {
    pub fn push(&mut self, path: impl Into<PathBuf>, contents: String) {
        self.files.push(OutputFile {
            path: path.into(),
            contents,
        });
    }

    /// Write all files under `output`, removing it first when `clean`.
    pub fn write(&self, output: &Path, clean: bool) -> Result<()> {
        if clean && output.exists() {
            fs::remove_dir_all(output).with_context(|| {
                format!("Failed to clear output directory: {}", output.display())
            })?;
        }
        fs::create_dir_all(output).with_context(|| {
            format!("Failed to create output directory: {}", output.display())
        })?;

        for file in &self.files {
            let dest = output.join(&file.path);
            if let Some(parent) = dest.parent()
                && parent != output
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&dest, &file.contents)
                .with_context(|| format!("Failed to write {}", dest.display()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_output() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("dist");

        let mut site = SiteOutput::default();
        site.push("index.html", "<p>index</p>".into());
        site.push("robots.txt", "User-agent: *\n".into());
        site.write(&output, true).unwrap();

        assert_eq!(fs::read_to_string(output.join("index.html")).unwrap(), "<p>index</p>");
        assert!(output.join("robots.txt").is_file());
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("dist");
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("stale.html"), "old").unwrap();

        let mut site = SiteOutput::default();
        site.push("index.html", String::new());
        site.write(&output, true).unwrap();

        assert!(!output.join("stale.html").exists());
        assert!(output.join("index.html").exists());
    }

    #[test]
    fn test_no_clean_keeps_existing_files() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("dist");
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("CNAME"), "specs.example").unwrap();

        let mut site = SiteOutput::default();
        site.push("index.html", String::new());
        site.write(&output, false).unwrap();

        assert!(output.join("CNAME").exists());
    }
}
