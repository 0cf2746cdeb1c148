//! Input data error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading build inputs.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("{kind} file not found: `{}`", .path.display())]
    NotFound { kind: &'static str, path: PathBuf },

    #[error("IO error when reading `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed CSV in `{}`", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid affiliate config `{}`", .path.display())]
    Affiliate {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: no slug (set `deeplink_slug` or `keyword`)")]
    MissingSlug { line: u64 },

    #[error("line {line}: slug `{slug}` is not a valid file name")]
    UnsafeSlug { line: u64, slug: String },

    #[error("line {line}: slug `{slug}` is reserved for a generated page")]
    ReservedSlug { line: u64, slug: String },

    #[error("slug `{slug}` appears on line {first} and line {second}")]
    DuplicateSlug { slug: String, first: u64, second: u64 },

    #[error("redirect from `{slug}` would overwrite the page of the same name")]
    RedirectConflict { slug: String },

    #[error("affiliate pattern for `{merchant}` uses `{{{name}}}` but line {line} has no such field")]
    Placeholder {
        merchant: String,
        name: String,
        line: u64,
    },
}
