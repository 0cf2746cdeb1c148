//! Catalog rows from `data/items.csv`.
//!
//! Column names come from the CSV header. A handful of columns carry
//! meaning for the build:
//!
//! | Column          | Use                                           |
//! |-----------------|-----------------------------------------------|
//! | `deeplink_slug` | Output file name (`{slug}.html`)              |
//! | `keyword`       | Title prefix, slug fallback                   |
//! | `entity`        | Title/description                             |
//! | `attribute`     | Title/description                             |
//! | `modifier`      | Description                                   |
//! | `merchant`      | Affiliate pattern key                         |
//! | `id`            | `{id}` placeholder (falls back to the slug)   |
//! | `updated`       | Per-page `lastmod` (`YYYY-MM-DD`)             |
//!
//! Every other column is passed through to templates as `item.<name>`.

use super::{DataError, csv_reader, require_file};
use crate::utils::{
    date::DateTimeUtc,
    slug::{is_reserved_slug, is_safe_slug, slugify},
};
use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::{fs::File, io::Read, path::Path};

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Line number in the source CSV (header is line 1).
    pub line: u64,
    /// Output file stem.
    pub slug: String,
    /// Fields in header order.
    fields: Vec<(String, String)>,
}

impl Item {
    /// Build an item from header/value pairs, deriving its slug.
    pub fn new(line: u64, fields: Vec<(String, String)>) -> Result<Self, DataError> {
        let mut item = Self {
            line,
            slug: String::new(),
            fields,
        };
        item.slug = item.resolve_slug()?;
        Ok(item)
    }

    /// Field value, `None` when the column does not exist.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Field value, empty when the column does not exist.
    pub fn field(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Per-row `updated` date, if present and valid.
    pub fn updated(&self) -> Option<DateTimeUtc> {
        DateTimeUtc::parse(self.get("updated")?)
    }

    /// `{keyword} | {entity} {attribute}`, trimmed.
    pub fn title(&self) -> String {
        let subject = join_words(&[self.field("entity"), self.field("attribute")]);
        let keyword = self.field("keyword");
        match (keyword.is_empty(), subject.is_empty()) {
            (false, false) => format!("{keyword} | {subject}"),
            (false, true) => keyword.to_string(),
            (true, _) if !subject.is_empty() => subject,
            _ => self.slug.clone(),
        }
    }

    /// `{entity} {attribute}: {modifier}`, trimmed.
    pub fn description(&self) -> String {
        let subject = join_words(&[self.field("entity"), self.field("attribute")]);
        let modifier = self.field("modifier");
        match (subject.is_empty(), modifier.is_empty()) {
            (false, false) => format!("{subject}: {modifier}"),
            (false, true) => subject,
            (true, false) => modifier.to_string(),
            (true, true) => self.title(),
        }
    }

    /// Slug from `deeplink_slug`, else derived from `keyword`, else from
    /// `entity` + `attribute`. Reserved stems such as `index` are rejected
    /// either way.
    fn resolve_slug(&self) -> Result<String, DataError> {
        let explicit = self.field("deeplink_slug");
        let slug = if explicit.is_empty() {
            let candidates = [
                slugify(self.field("keyword")),
                slugify(&join_words(&[self.field("entity"), self.field("attribute")])),
            ];
            candidates
                .into_iter()
                .find(|slug| !slug.is_empty())
                .ok_or(DataError::MissingSlug { line: self.line })?
        } else if is_safe_slug(explicit) {
            explicit.to_string()
        } else {
            return Err(DataError::UnsafeSlug {
                line: self.line,
                slug: explicit.to_string(),
            });
        };

        if is_reserved_slug(&slug) {
            return Err(DataError::ReservedSlug {
                line: self.line,
                slug,
            });
        }
        Ok(slug)
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn join_words(words: &[&str]) -> String {
    words
        .iter()
        .filter(|w| !w.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Load every row of the items CSV.
///
/// Fails on a missing file, malformed CSV, a row without a usable slug, or
/// two rows sharing a slug.
pub fn load_items(path: &Path) -> Result<Vec<Item>, DataError> {
    require_file(path, "items")?;
    let file = File::open(path).map_err(|e| DataError::Io(path.to_path_buf(), e))?;
    parse_items(file, path)
}

/// Parse items from any reader; `source` is only used in error messages.
pub fn parse_items<R: Read>(input: R, source: &Path) -> Result<Vec<Item>, DataError> {
    let csv_error = |e: csv::Error| DataError::Csv {
        path: source.to_path_buf(),
        source: e,
    };

    let mut reader = csv_reader(input);
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut items = Vec::new();
    let mut seen: FxHashMap<String, u64> = FxHashMap::default();

    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map_or(0, |p| p.line());

        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let item = Item::new(line, fields)?;

        if let Some(&first) = seen.get(&item.slug) {
            return Err(DataError::DuplicateSlug {
                slug: item.slug,
                first,
                second: line,
            });
        }
        seen.insert(item.slug.clone(), line);
        items.push(item);
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = "keyword,entity,attribute,modifier,merchant,deeplink_slug\n";

    fn parse(body: &str) -> Result<Vec<Item>, DataError> {
        let csv = format!("{HEADER}{body}");
        parse_items(csv.as_bytes(), Path::new("items.csv"))
    }

    #[test]
    fn test_parse_rows_in_order() {
        let items = parse(
            "USB-C cable,USB-C,charging speed,100W,amazon,usb-c-100w\n\
             HDMI cable,HDMI,version,2.1,amazon,hdmi-21\n",
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].slug, "usb-c-100w");
        assert_eq!(items[1].slug, "hdmi-21");
        assert_eq!(items[0].line, 2);
        assert_eq!(items[1].field("merchant"), "amazon");
    }

    #[test]
    fn test_values_are_trimmed() {
        let items = parse("  SSD , NVMe , speed , PCIe 4.0 , , ssd-gen4 \n").unwrap();
        assert_eq!(items[0].field("entity"), "NVMe");
        assert_eq!(items[0].slug, "ssd-gen4");
    }

    #[test]
    fn test_title_and_description() {
        let items = parse("USB-C cable,USB-C,charging speed,100W,amazon,usb-c-100w\n").unwrap();
        assert_eq!(items[0].title(), "USB-C cable | USB-C charging speed");
        assert_eq!(items[0].description(), "USB-C charging speed: 100W");
    }

    #[test]
    fn test_slug_derived_from_keyword() {
        let items = parse("Café Grinder,Grinder,burr size,40mm,,\n").unwrap();
        assert_eq!(items[0].slug, "cafe-grinder");
    }

    #[test]
    fn test_slug_derived_from_entity_attribute() {
        let items = parse(",RAM,latency,CL30,,\n").unwrap();
        assert_eq!(items[0].slug, "ram-latency");
    }

    #[test]
    fn test_missing_slug_fails() {
        let err = parse(",,,,,\n").unwrap_err();
        assert!(matches!(err, DataError::MissingSlug { line: 2 }));
    }

    #[test]
    fn test_unsafe_slug_fails() {
        let err = parse("a,b,c,d,e,../escape\n").unwrap_err();
        assert!(matches!(err, DataError::UnsafeSlug { .. }));
    }

    #[test]
    fn test_index_slug_is_reserved() {
        let err = parse("a,b,c,d,e,index\n").unwrap_err();
        assert!(matches!(err, DataError::ReservedSlug { line: 2, ref slug } if slug == "index"));
    }

    #[test]
    fn test_derived_index_slug_is_reserved() {
        let err = parse("Index,,,,,\n").unwrap_err();
        assert!(matches!(err, DataError::ReservedSlug { ref slug, .. } if slug == "index"));
    }

    #[test]
    fn test_duplicate_slug_fails() {
        let err = parse("a,b,c,d,e,same\nf,g,h,i,j,same\n").unwrap_err();
        match err {
            DataError::DuplicateSlug {
                slug,
                first,
                second,
            } => {
                assert_eq!(slug, "same");
                assert_eq!((first, second), (2, 3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ragged_row_fails() {
        let err = parse("only,three,fields\n").unwrap_err();
        assert!(matches!(err, DataError::Csv { .. }));
    }

    #[test]
    fn test_header_only_yields_no_items() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_updated_column() {
        let csv = "keyword,deeplink_slug,updated\nA,a,2025-03-01\nB,b,garbage\n";
        let items = parse_items(csv.as_bytes(), Path::new("items.csv")).unwrap();
        assert_eq!(items[0].updated(), Some(DateTimeUtc::from_ymd(2025, 3, 1)));
        assert_eq!(items[1].updated(), None);
    }

    #[test]
    fn test_serialize_keeps_header_order() {
        let items = parse("k,e,a,m,shop,s\n").unwrap();
        let json = serde_json::to_string(&items[0]).unwrap();
        assert_eq!(
            json,
            r#"{"keyword":"k","entity":"e","attribute":"a","modifier":"m","merchant":"shop","deeplink_slug":"s"}"#
        );
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_items(&temp.path().join("items.csv")).unwrap_err();
        assert!(matches!(err, DataError::NotFound { kind: "items", .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("items.csv");
        fs::write(&path, format!("{HEADER}k,e,a,m,shop,s\n")).unwrap();
        assert_eq!(load_items(&path).unwrap().len(), 1);
    }
}
