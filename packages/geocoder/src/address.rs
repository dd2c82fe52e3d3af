//! Search-box input normalization.
//!
//! Users type addresses in many shapes: `"123 Main St"`,
//! `"  30-50 Whitestone Expwy,  Queens "`, `"???"`. This module cleans the
//! input into a query worth sending to a geocoder, and rejects input that
//! cannot resolve to anything.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for collapsing runs of internal whitespace.
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Regex detecting an NYC locality already named in the query. `ny` and
/// `nyc` are matched on word boundaries so street names like "Sunnyside"
/// don't count.
static NYC_HINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(ny|nyc|new york|brooklyn|queens|manhattan|bronx|staten island)\b")
        .expect("valid regex")
});

/// Non-geocodable input patterns.
static SKIP_PATTERNS: &[&str] = &["UNKNOWN", "N/A", "NA", "NONE", "?"];

/// Normalizes raw search-box input into a geocoding query.
///
/// Trims, collapses whitespace, rejects garbage, and appends
/// `", New York, NY"` when the query names no NYC locality — the dataset
/// is NYC-only, so a bare street address always means one here.
///
/// Returns `None` for input that should not be sent to any provider.
#[must_use]
pub fn normalize_search_input(raw: &str) -> Option<String> {
    let cleaned = WHITESPACE_RE.replace_all(raw.trim(), " ").to_string();

    if cleaned.is_empty()
        || SKIP_PATTERNS
            .iter()
            .any(|p| cleaned.eq_ignore_ascii_case(p))
    {
        return None;
    }

    if NYC_HINT_RE.is_match(&cleaned) {
        Some(cleaned)
    } else {
        Some(format!("{cleaned}, New York, NY"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace() {
        assert_eq!(
            normalize_search_input("  123   Main  St, Queens ").as_deref(),
            Some("123 Main St, Queens")
        );
    }

    #[test]
    fn appends_city_when_no_locality_named() {
        assert_eq!(
            normalize_search_input("350 5th Ave").as_deref(),
            Some("350 5th Ave, New York, NY")
        );
    }

    #[test]
    fn keeps_query_with_borough_named() {
        assert_eq!(
            normalize_search_input("Flushing Meadows, Queens").as_deref(),
            Some("Flushing Meadows, Queens")
        );
    }

    #[test]
    fn ny_matches_on_word_boundary_only() {
        // "Sunnyside" contains "ny" but names no locality.
        assert_eq!(
            normalize_search_input("Sunnyside Ave").as_deref(),
            Some("Sunnyside Ave, New York, NY")
        );
        assert_eq!(
            normalize_search_input("43rd St, Sunnyside, NY").as_deref(),
            Some("43rd St, Sunnyside, NY")
        );
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert_eq!(normalize_search_input(""), None);
        assert_eq!(normalize_search_input("   "), None);
        assert_eq!(normalize_search_input("n/a"), None);
        assert_eq!(normalize_search_input("UNKNOWN"), None);
        assert_eq!(normalize_search_input("?"), None);
    }
}
