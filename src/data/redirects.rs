//! Slug redirects from `data/redirects.csv` (`old_slug,new_slug`).
//!
//! Used after a slug change so the old URL keeps answering instead of 404.

use super::{DataError, csv_reader};
use crate::{debug, utils::slug::is_safe_slug};
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};

/// One soft redirect.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Redirect {
    #[serde(default)]
    pub old_slug: String,
    #[serde(default)]
    pub new_slug: String,
}

/// Load redirects; a missing file means none.
pub fn load_redirects(path: &Path) -> Result<Vec<Redirect>, DataError> {
    if !path.exists() {
        debug!("redirect"; "no redirects at {}", path.display());
        return Ok(Vec::new());
    }
    let file = File::open(path).map_err(|e| DataError::Io(path.to_path_buf(), e))?;
    parse_redirects(file, path)
}

/// Parse redirects from any reader; rows missing either side are skipped.
pub fn parse_redirects<R: Read>(input: R, source: &Path) -> Result<Vec<Redirect>, DataError> {
    let csv_error = |e: csv::Error| DataError::Csv {
        path: source.to_path_buf(),
        source: e,
    };

    let mut reader = csv_reader(input);
    let headers = reader.headers().map_err(csv_error)?.clone();
    let mut redirects = Vec::new();

    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map_or(0, |p| p.line());
        let redirect: Redirect = record.deserialize(Some(&headers)).map_err(csv_error)?;

        if redirect.old_slug.is_empty() || redirect.new_slug.is_empty() {
            continue;
        }
        for slug in [&redirect.old_slug, &redirect.new_slug] {
            if !is_safe_slug(slug) {
                return Err(DataError::UnsafeSlug {
                    line,
                    slug: slug.clone(),
                });
            }
        }
        redirects.push(redirect);
    }

    Ok(redirects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(csv: &str) -> Result<Vec<Redirect>, DataError> {
        parse_redirects(csv.as_bytes(), Path::new("redirects.csv"))
    }

    #[test]
    fn test_parse_pairs() {
        let redirects = parse("old_slug,new_slug\nold-a,new-a\n old-b , new-b \n").unwrap();
        assert_eq!(redirects.len(), 2);
        assert_eq!(redirects[1].old_slug, "old-b");
        assert_eq!(redirects[1].new_slug, "new-b");
    }

    #[test]
    fn test_incomplete_rows_skipped() {
        let redirects = parse("old_slug,new_slug\nold-a,\n,new-b\nold-c,new-c\n").unwrap();
        assert_eq!(
            redirects,
            vec![Redirect {
                old_slug: "old-c".into(),
                new_slug: "new-c".into(),
            }]
        );
    }

    #[test]
    fn test_unsafe_slug_rejected() {
        let err = parse("old_slug,new_slug\n../x,new\n").unwrap_err();
        assert!(matches!(err, DataError::UnsafeSlug { line: 2, .. }));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(load_redirects(&temp.path().join("redirects.csv")).unwrap().is_empty());
    }
}
