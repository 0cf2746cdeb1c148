//! Site initialization module.
//!
//! Creates a starter project that builds out of the box.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Directory structure creation
//! - [`files`]: Config, sample data and template files

mod files;
mod structure;
mod validate;

use crate::{config::SiteConfig, log};
use anyhow::Result;

pub use validate::InitMode;

/// Create a new site with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure
/// 3. Write config, sample data, templates and ignore file
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", files::config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    validate::validate_target(root, mode)?;
    structure::create_structure(root)?;

    files::write_config(root)?;
    files::write_starter_files(root)?;
    files::write_ignore_file(root)?;

    log!("init"; "site initialized at {}", root.display());
    log!("init"; "next: edit data/items.csv, then run `autospec build`");
    Ok(())
}
