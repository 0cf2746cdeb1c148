//! Site directory structure creation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Directories of a starter project.
const SITE_DIRS: &[&str] = &["data", "config", "templates"];

/// Create the project directories at `root`, creating `root` itself if needed.
pub fn create_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }
    Ok(())
}
