//! Path normalization utilities.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve `path` against `root` unless it is already absolute.
#[inline]
pub fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        normalize_path(&root.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("relative/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_resolve_against_keeps_absolute() {
        let resolved = resolve_against(Path::new("/site"), Path::new("/elsewhere/items.csv"));
        assert_eq!(resolved, PathBuf::from("/elsewhere/items.csv"));
    }

    #[test]
    fn test_resolve_against_joins_relative() {
        let temp = tempfile::TempDir::new().unwrap();
        let resolved = resolve_against(temp.path(), Path::new("data/items.csv"));
        assert!(resolved.ends_with("data/items.csv"));
        assert!(resolved.is_absolute());
    }
}
