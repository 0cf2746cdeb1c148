//! Tera rendering of item and index pages.
//!
//! Every `*.html` file under the templates directory is loaded, so
//! `page.html` and `index.html` may extend a shared layout. Both of those
//! two must exist.

mod context;

pub use context::{IndexContext, PageContext, PageLink, SiteContext};

use crate::utils::xml::escape_xml;
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::{error::Error as _, path::Path};
use tera::Tera;

pub const PAGE_TEMPLATE: &str = "page.html";
pub const INDEX_TEMPLATE: &str = "index.html";

/// Loaded template set.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Load templates from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            bail!("templates directory not found: `{}`", dir.display());
        }

        let glob = dir.join("**").join("*.html");
        let tera = Tera::new(&glob.to_string_lossy())
            .map_err(|e| anyhow::anyhow!(tera_chain(&e)))
            .with_context(|| format!("failed to load templates from `{}`", dir.display()))?;

        Self::from_tera(tera, dir)
    }

    /// Build a renderer from in-memory template sources.
    pub fn from_sources(page: &str, index: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates([(PAGE_TEMPLATE, page), (INDEX_TEMPLATE, index)])
            .map_err(|e| anyhow::anyhow!(tera_chain(&e)))?;
        Self::from_tera(tera, Path::new("<memory>"))
    }

    fn from_tera(mut tera: Tera, dir: &Path) -> Result<Self> {
        tera.set_escape_fn(escape_html);

        let names: Vec<_> = tera.get_template_names().collect();
        for required in [PAGE_TEMPLATE, INDEX_TEMPLATE] {
            if !names.contains(&required) {
                bail!(
                    "template not found: `{}`",
                    dir.join(required).display()
                );
            }
        }
        Ok(Self { tera })
    }

    pub fn render_page(&self, ctx: &PageContext<'_>) -> Result<String> {
        self.render(PAGE_TEMPLATE, ctx)
            .with_context(|| format!("failed to render page `{}`", ctx.slug))
    }

    pub fn render_index(&self, ctx: &IndexContext<'_>) -> Result<String> {
        self.render(INDEX_TEMPLATE, ctx)
            .context("failed to render index page")
    }

    fn render(&self, name: &str, ctx: &impl Serialize) -> Result<String> {
        let context = tera::Context::from_serialize(ctx)
            .map_err(|e| anyhow::anyhow!(tera_chain(&e)))?;
        self.tera
            .render(name, &context)
            .map_err(|e| anyhow::anyhow!(tera_chain(&e)))
    }
}

/// Autoescape for `.html` templates; leaves `/` alone so URLs stay readable.
fn escape_html(input: &str) -> String {
    escape_xml(input).into_owned()
}

/// Flatten a Tera error and its sources into one message.
///
/// Tera puts the useful part (the missing variable, the bad filter) in the
/// source chain rather than the top-level message.
fn tera_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
