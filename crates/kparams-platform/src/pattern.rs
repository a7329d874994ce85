//! Device and build pattern matching.
//!
//! A pattern is a whitespace-separated list of alternatives. Each alternative
//! is one of:
//! - `*`, which matches any value;
//! - `LOW-HIGH`, where both ends are build identifiers, which matches any
//!   build identifier in the inclusive range;
//! - any other string, which matches only an identical value.
//!
//! Matching is total: a malformed range is treated as a literal.

use crate::build_version::BuildVersion;

/// The pattern that matches every value.
pub const WILDCARD: &str = "*";

/// Whether `value` matches `pattern`.
///
/// A pattern identical to the value always matches, even if it contains
/// whitespace.
pub fn matches(pattern: &str, value: &str) -> bool {
    pattern == value
        || pattern
            .split_whitespace()
            .any(|alternative| alternative_matches(alternative, value))
}

fn alternative_matches(alternative: &str, value: &str) -> bool {
    if alternative == WILDCARD || alternative == value {
        return true;
    }
    match parse_range(alternative) {
        Some((low, high)) => value
            .parse::<BuildVersion>()
            .map(|v| v.within(&low, &high))
            .unwrap_or(false),
        None => false,
    }
}

fn parse_range(alternative: &str) -> Option<(BuildVersion, BuildVersion)> {
    let (low, high) = alternative.split_once('-')?;
    Some((low.parse().ok()?, high.parse().ok()?))
}

/// Whether `pattern` contains a `*` alternative, i.e. matches every value.
pub fn is_wildcard(pattern: &str) -> bool {
    pattern.split_whitespace().any(|alt| alt == WILDCARD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_matches_anything() {
        assert!(matches("*", "iPhone8,2"));
        assert!(matches("*", "16E227"));
        assert!(matches("*", ""));
    }

    #[test]
    fn literal_is_exact() {
        assert!(matches("iPhone8,2", "iPhone8,2"));
        assert!(!matches("iPhone8,2", "iPhone8,1"));
        assert!(!matches("iPhone8", "iPhone8,2"));
        assert!(!matches("16E227", "16E22"));
    }

    #[test]
    fn identical_pattern_with_spaces_matches() {
        assert!(matches("iPhone 8", "iPhone 8"));
        assert!(matches("16E227 beta", "16E227 beta"));
        // Split into alternatives, neither of which equals the value.
        assert!(!matches("iPhone 8", "iPhone 9"));
    }

    #[test]
    fn alternatives() {
        let p = "iPhone8,1 iPhone8,2  iPhone8,4";
        assert!(matches(p, "iPhone8,1"));
        assert!(matches(p, "iPhone8,4"));
        assert!(!matches(p, "iPhone9,1"));
    }

    #[test]
    fn build_range() {
        let p = "16A366-16E227";
        assert!(matches(p, "16A366"));
        assert!(matches(p, "16D57"));
        assert!(matches(p, "16E227"));
        assert!(!matches(p, "15G77"));
        assert!(!matches(p, "16F156"));
        // Non-build values never fall in a range.
        assert!(!matches(p, "iPhone8,2"));
    }

    #[test]
    fn malformed_range_is_literal() {
        assert!(matches("abc-def", "abc-def"));
        assert!(!matches("abc-def", "abc"));
    }

    #[test]
    fn empty_pattern_matches_only_empty_value() {
        assert!(matches("", ""));
        assert!(!matches("", "iPhone8,2"));
        assert!(!matches("   ", "iPhone8,2"));
    }

    #[test]
    fn wildcard_detection() {
        assert!(is_wildcard("*"));
        assert!(is_wildcard("iPhone8,2 *"));
        assert!(!is_wildcard("iPhone8,2"));
    }
}
