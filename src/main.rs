//! AutoSpec - turns a CSV catalog into a static affiliate site.

mod cli;
mod config;
mod data;
mod embed;
mod generator;
mod logger;
mod ping;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&config, name.is_some(), *dry),
        Commands::Build { .. } => cli::build::build_site(&config, false).map(|_| ()),
        Commands::Ping { args } => cli::ping::ping_sitemap(&config, args.strict).map(|_| ()),
    }
}
