//! Path segmentation
//!
//! Splits a navigation path into segments and rebuilds hrefs from them.

use regex::Regex;
use std::sync::LazyLock;

/// Path separator
pub const SEPARATOR: char = '/';

static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("numeric segment pattern is valid"));

/// Split a path into its non-empty segments
///
/// Leading, trailing and duplicate separators never yield a segment, so
/// `"/"`, `""` and `"//"` all have zero segments.
pub fn segments(path: &str) -> Vec<&str> {
    path.split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Href for the segment at `index`: every segment up to and including it
pub fn href_for(segments: &[&str], index: usize) -> String {
    let end = index.saturating_add(1).min(segments.len());
    let mut href = String::from(SEPARATOR);
    href.push_str(&segments[..end].join("/"));
    href
}

/// Whether a segment is a numeric record identifier (ASCII digits only)
pub fn is_numeric(segment: &str) -> bool {
    NUMERIC_RE.is_match(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_has_no_segments() {
        assert!(segments("/").is_empty());
        assert!(segments("").is_empty());
        assert!(segments("///").is_empty());
    }

    #[test]
    fn test_duplicate_separators_dropped() {
        assert_eq!(segments("//clients///123/"), vec!["clients", "123"]);
        assert_eq!(segments("clients/123"), vec!["clients", "123"]);
    }

    #[test]
    fn test_href_for() {
        let segs = vec!["clients", "123", "edit"];
        assert_eq!(href_for(&segs, 0), "/clients");
        assert_eq!(href_for(&segs, 1), "/clients/123");
        assert_eq!(href_for(&segs, 2), "/clients/123/edit");
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("123"));
        assert!(is_numeric("007"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("12a"));
        assert!(!is_numeric("-1"));
        assert!(!is_numeric("١٢٣"));
    }
}
