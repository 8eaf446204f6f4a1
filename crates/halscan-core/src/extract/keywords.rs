//! Marker patterns and keyword sets for label text.

use lazy_static::lazy_static;
use regex::Regex;

/// Certification marks and regulatory terms that signal halal status.
///
/// Matched case-insensitively against the whole text: the word itself, the
/// Malaysian certification body, the Malaysian standard code, and the
/// jurisdiction name.
pub const HALAL_KEYWORDS: [&str; 4] = ["halal", "jakim", "ms 1500", "malaysia"];

lazy_static! {
    /// Ingredient section marker (English, or Malay "Ramuan").
    pub static ref INGREDIENTS_MARKER: Regex =
        Regex::new(r"(?i)\b(?:ingredients|ramuan)\b").unwrap();

    /// Manufacturer marker (English, or Malay "Dikeluarkan oleh").
    pub static ref MANUFACTURER_MARKER: Regex =
        Regex::new(r"(?i)manufactured\s+by|dikeluarkan\s+oleh").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredients_marker_is_case_insensitive() {
        assert!(INGREDIENTS_MARKER.is_match("INGREDIENTS: sugar"));
        assert!(INGREDIENTS_MARKER.is_match("Ramuan: gula"));
        assert!(!INGREDIENTS_MARKER.is_match("contents: sugar"));
    }

    #[test]
    fn test_manufacturer_marker_variants() {
        assert!(MANUFACTURER_MARKER.is_match("Manufactured by: Acme"));
        assert!(MANUFACTURER_MARKER.is_match("DIKELUARKAN OLEH: Syarikat Acme"));
        assert!(!MANUFACTURER_MARKER.is_match("Distributed by: Acme"));
    }
}
