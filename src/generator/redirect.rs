//! Soft redirect pages for renamed slugs.

use crate::{
    data::{DataError, Redirect},
    embed::build::{REDIRECT_HTML, RedirectVars},
    render::SiteContext,
    utils::slug::is_reserved_slug,
};
use rustc_hash::FxHashSet;

/// Render `{old_slug}.html` for every redirect.
///
/// A redirect whose source is a live page slug or a reserved stem such as
/// `index` is rejected, it would silently replace that page.
pub fn render_redirects(
    site: &SiteContext,
    redirects: &[Redirect],
    page_slugs: &FxHashSet<&str>,
) -> Result<Vec<(String, String)>, DataError> {
    redirects
        .iter()
        .map(|redirect| {
            let old = redirect.old_slug.as_str();
            if page_slugs.contains(old) || is_reserved_slug(old) {
                return Err(DataError::RedirectConflict {
                    slug: redirect.old_slug.clone(),
                });
            }
            let target = site.url_for(&format!("{}.html", redirect.new_slug));
            let html = REDIRECT_HTML.render(&RedirectVars {
                target_url: &target,
                language: &site.language,
            });
            Ok((format!("{}.html", redirect.old_slug), html))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn redirect(from: &str, to: &str) -> Redirect {
        Redirect {
            old_slug: from.into(),
            new_slug: to.into(),
        }
    }

    fn site() -> SiteContext {
        let mut config = SiteConfig::default();
        config.site.url = "https://specs.example".into();
        SiteContext::from_config(&config)
    }

    #[test]
    fn test_render_redirects() {
        let slugs = FxHashSet::from_iter(["new-a"]);
        let pages = render_redirects(&site(), &[redirect("old-a", "new-a")], &slugs).unwrap();

        assert_eq!(pages.len(), 1);
        let (path, html) = &pages[0];
        assert_eq!(path, "old-a.html");
        assert!(html.contains("url=https://specs.example/new-a.html"));
        assert!(html.contains(r#"rel="canonical" href="https://specs.example/new-a.html""#));
    }

    #[test]
    fn test_redirect_over_live_page_fails() {
        let slugs = FxHashSet::from_iter(["a", "b"]);
        let err = render_redirects(&site(), &[redirect("a", "b")], &slugs).unwrap_err();
        assert!(matches!(err, DataError::RedirectConflict { ref slug } if slug == "a"));
    }

    #[test]
    fn test_redirect_over_index_fails() {
        let slugs = FxHashSet::from_iter(["a"]);
        let err = render_redirects(&site(), &[redirect("index", "a")], &slugs).unwrap_err();
        assert!(matches!(err, DataError::RedirectConflict { ref slug } if slug == "index"));
    }
}
