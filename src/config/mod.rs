//! Site configuration management for `autospec.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── ping       # [ping]
//! │   ├── site       # [site]
//! │   └── sitemap    # [sitemap]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Precedence
//!
//! CLI flag > environment variable > `autospec.toml` > built-in default.
//!
//! | Variable        | Overrides          |
//! |-----------------|--------------------|
//! | `BASE_URL`      | `site.url`         |
//! | `SITEMAP_URL`   | `ping.sitemap_url` |
//! | `ADS_TXT_LINE`  | `site.ads_txt`     |

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, non_blank};

pub use section::{
    BuildSectionConfig, ChangeFreq, PingConfig, SiteSectionConfig, SitemapConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands, PingArgs},
    debug, log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename
pub const CONFIG_FILE: &str = "autospec.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing autospec.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, `None` when running on defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory - parent of config file, or cwd
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Build paths
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Sitemap settings
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// Search engine ping settings
    #[serde(default)]
    pub ping: PingConfig,
}

impl SiteConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// Searches upward from cwd for the config file; a missing default
    /// config is fine, the built-in defaults apply.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd, |key| std::env::var(key).ok())
    }

    /// Load configuration with an explicit working directory and
    /// environment lookup.
    pub fn load_from(
        cli: &Cli,
        cwd: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let (root, config_path) = Self::resolve_root(cli, cwd)?;

        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        let root = normalize_path(&root);
        config.config_path = config_path;
        config.root = root.clone();

        config.apply_env(env);
        config.apply_command_options(cli);
        config.build.normalize(&root);

        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve project root and config file location.
    fn resolve_root(cli: &Cli, cwd: &Path) -> Result<(PathBuf, Option<PathBuf>)> {
        if let Commands::Init { name, .. } = &cli.command {
            let root = name.as_ref().map_or_else(|| cwd.to_path_buf(), |n| cwd.join(n));
            return Ok((root, None));
        }

        match find_config_file(cwd, &cli.config) {
            Some(path) => {
                let root = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| cwd.to_path_buf());
                Ok((root, Some(path)))
            }
            None if cli.config != Path::new(CONFIG_FILE) => Err(ConfigError::Io(
                cli.config.clone(),
                std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
            )
            .into()),
            None => {
                debug!("config"; "no {} found, using defaults", CONFIG_FILE);
                Ok((cwd.to_path_buf(), None))
            }
        }
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Sitemap URL submitted by `ping`.
    pub fn sitemap_url(&self) -> String {
        self.ping
            .sitemap_url
            .clone()
            .unwrap_or_else(|| format!("{}/sitemap.xml", self.site.base_url()))
    }

    // ========================================================================
    // environment and cli configuration updates
    // ========================================================================

    /// Apply environment variable overrides.
    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(url) = non_blank(env("BASE_URL")) {
            self.site.url = url;
        }
        if let Some(url) = non_blank(env("SITEMAP_URL")) {
            self.ping.sitemap_url = Some(url);
        }
        if let Some(line) = non_blank(env("ADS_TXT_LINE")) {
            self.site.ads_txt = Some(line);
        }
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Ping { args } => self.apply_ping_args(args),
            Commands::Init { .. } => {}
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        Self::update_option(&mut self.build.clean, args.clean.as_ref());
        Self::update_option(&mut self.build.output, args.output.as_ref());
        if let Some(ref url) = args.site_url {
            self.site.url = url.clone();
        }
    }

    /// Apply ping arguments from CLI.
    fn apply_ping_args(&mut self, args: &PingArgs) {
        if let Some(ref sitemap) = args.sitemap {
            self.ping.sitemap_url = Some(sitemap.clone());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.sitemap.validate(&mut diag);
        self.ping.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config and panic on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Build a config rooted at `root` with defaults resolved against it.
#[cfg(test)]
pub fn test_config_at(root: &Path, content: &str) -> SiteConfig {
    let mut config = test_parse_config(content);
    config.root = root.to_path_buf();
    config.build.normalize(root);
    config
}

// ============================================================================
// tests
// ============================================================================
