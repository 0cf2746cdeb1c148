//! Absolute URL building.

use url::Url;

/// Append `segment` to the path of `base` as one percent-encoded segment.
///
/// Falls back to plain concatenation when `base` is not a hierarchical URL.
pub fn join_url(base: &str, segment: &str) -> String {
    let Ok(mut url) = Url::parse(base) else {
        return format!("{base}/{segment}");
    };
    match url.path_segments_mut() {
        Ok(mut segments) => {
            segments.pop_if_empty().push(segment);
        }
        Err(()) => return format!("{base}/{segment}"),
    }
    url.into()
}
