//! Build inputs: catalog rows, affiliate patterns and redirects.
//!
//! Every loader here runs before the output directory is touched, so a bad
//! input aborts the build without leaving partial output behind.
//!
//! | Module      | Input                    | Required |
//! |-------------|--------------------------|----------|
//! | `items`     | `data/items.csv`         | yes      |
//! | `affiliate` | `config/affiliates.json` | no       |
//! | `redirects` | `data/redirects.csv`     | no       |

mod affiliate;
mod error;
mod items;
mod redirects;

pub use affiliate::AffiliateConfig;
pub use error::DataError;
pub use items::{Item, load_items};
pub use redirects::{Redirect, load_redirects};

#[cfg(test)]
pub use items::parse_items;

use std::path::Path;

/// Open a CSV reader the way every loader here expects: headers on,
/// whitespace trimmed, strict field counts.
fn csv_reader<R: std::io::Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input)
}

/// Fail with `NotFound` unless `path` is an existing file.
fn require_file(path: &Path, kind: &'static str) -> Result<(), DataError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(DataError::NotFound {
            kind,
            path: path.to_path_buf(),
        })
    }
}
