//! URL slug generation.
//!
//! Turns free text such as `"USB-C 케이블 | 충전 속도"` into a file-safe slug.
//! Non-ASCII text is transliterated with `deunicode` before separators are
//! collapsed.

/// Slugify text: transliterate to ASCII, lowercase, dash-separate.
///
/// Returns an empty string when nothing alphanumeric survives.
///
/// # Examples
///
/// - `slugify("Hello World")` -> `"hello-world"`
/// - `slugify("  USB-C  Cable!! ")` -> `"usb-c-cable"`
/// - `slugify("Café crème")` -> `"cafe-creme"`
pub fn slugify(text: &str) -> String {
    let ascii = deunicode::deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Stems of pages the build writes itself.
const RESERVED_SLUGS: &[&str] = &["index"];

/// Check whether an item or redirect page would overwrite a generated page.
///
/// Compared case-insensitively, `INDEX.html` and `index.html` are the same
/// file on case-insensitive filesystems.
pub fn is_reserved_slug(slug: &str) -> bool {
    RESERVED_SLUGS.iter().any(|r| r.eq_ignore_ascii_case(slug))
}

/// Check that a slug given verbatim in the data is safe as a file name.
///
/// Rejects path separators, parent references and control characters;
/// everything else (including Unicode) is left to the author.
pub fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\'])
        && !slug.chars().any(char::is_control)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  USB-C  Cable!! "), "usb-c-cable");
    }

    #[test]
    fn test_slugify_unicode() {
        assert_eq!(slugify("Café crème"), "cafe-creme");
        assert!(!slugify("충전 속도").is_empty());
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("--- !!"), "");
    }

    #[test]
    fn test_is_safe_slug() {
        assert!(is_safe_slug("usb-c-cable"));
        assert!(is_safe_slug("충전기"));
        assert!(!is_safe_slug(""));
        assert!(!is_safe_slug(".."));
        assert!(!is_safe_slug("a/b"));
        assert!(!is_safe_slug("a\\b"));
    }

    #[test]
    fn test_is_reserved_slug() {
        assert!(is_reserved_slug("index"));
        assert!(is_reserved_slug("Index"));
        assert!(!is_reserved_slug("index-2"));
        assert!(!is_reserved_slug("sitemap"));
    }
}
