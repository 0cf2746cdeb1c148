//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// AutoSpec: turn a CSV catalog into a static affiliate site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: autospec.toml, optional)
    #[arg(short = 'C', long, default_value = "autospec.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scaffold a new site (config, sample data, templates)
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Render every CSV row into a page and write the site
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Notify search engines that the sitemap changed
    #[command(visible_alias = "p")]
    Ping {
        #[command(flatten)]
        args: PingArgs,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Clean output directory completely before writing
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub clean: Option<bool>,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Override site URL for deployment (takes precedence over BASE_URL).
    ///
    /// Example: autospec build --site-url "https://example.github.io"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,
}

/// Ping command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PingArgs {
    /// Sitemap URL to submit (takes precedence over SITEMAP_URL)
    #[arg(short, long, value_hint = clap::ValueHint::Url)]
    pub sitemap: Option<String>,

    /// Exit with an error when every endpoint failed
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from(["autospec", "build", "--clean", "false", "-U", "https://a.b"])
            .unwrap();
        match cli.command {
            Commands::Build { build_args } => {
                assert_eq!(build_args.clean, Some(false));
                assert_eq!(build_args.site_url.as_deref(), Some("https://a.b"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("autospec.toml"));
    }

    #[test]
    fn test_parse_ping() {
        let cli = Cli::try_parse_from([
            "autospec",
            "ping",
            "--sitemap",
            "https://a.b/sitemap.xml",
            "--strict",
        ])
        .unwrap();
        match cli.command {
            Commands::Ping { args } => {
                assert_eq!(args.sitemap.as_deref(), Some("https://a.b/sitemap.xml"));
                assert!(args.strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_init_alias() {
        let cli = Cli::try_parse_from(["autospec", "i", "my-site", "--dry"]).unwrap();
        assert!(cli.is_init());
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["autospec", "build", "-V"]).unwrap();
        assert!(cli.verbose);
    }
}
