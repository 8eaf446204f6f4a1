//! Heuristic free-text parsing for raw OCR output.

use tracing::debug;

use super::keywords::{HALAL_KEYWORDS, INGREDIENTS_MARKER, MANUFACTURER_MARKER};
use super::{RecordExtractor, after_colon};
use crate::models::record::ProductRecord;

/// Minimum trimmed length for a line to qualify as the product name.
const MIN_NAME_LEN: usize = 3;

/// Parser for unstructured OCR text.
///
/// Four heuristics run independently over the same line sequence, so a line
/// may contribute to more than one field:
///
/// - halal detection scans the whole text for known certification keywords
/// - the product name is the first non-empty line longer than three
///   characters (one-shot, never overwritten)
/// - the ingredients section starts at the first marker line and keeps
///   appending space-joined lines until a blank line or end of input
/// - the manufacturer comes from the marker line's colon value, falling back
///   to the next line when the colon value is empty
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextParser;

impl HeuristicTextParser {
    /// Create a new heuristic parser.
    pub fn new() -> Self {
        Self
    }
}

impl RecordExtractor for HeuristicTextParser {
    fn extract(&self, text: &str) -> ProductRecord {
        let mut record = ProductRecord::new();

        // Whole-text scan, independent of the per-line walk below.
        let lowered = text.to_lowercase();
        record.halal_certified = HALAL_KEYWORDS.iter().any(|kw| lowered.contains(kw));

        let lines: Vec<&str> = text.lines().collect();
        let mut in_ingredients = false;
        let mut ingredients_seen = false;
        let mut manufacturer_seen = false;

        for (idx, raw) in lines.iter().enumerate() {
            let line = raw.trim();

            // Product name: first qualifying line, one-shot.
            if record.product_name.is_empty() && line.len() > MIN_NAME_LEN {
                record.product_name = line.to_string();
            }

            // Ingredients: only the first marker opens a section; a blank
            // line closes it.
            if in_ingredients {
                if line.is_empty() {
                    in_ingredients = false;
                } else {
                    if !record.ingredients.is_empty() {
                        record.ingredients.push(' ');
                    }
                    record.ingredients.push_str(line);
                }
            } else if !ingredients_seen && INGREDIENTS_MARKER.is_match(line) {
                ingredients_seen = true;
                in_ingredients = true;
                record.ingredients = after_colon(line);
            }

            // Manufacturer: colon value, or the very next line when empty.
            if !manufacturer_seen && MANUFACTURER_MARKER.is_match(line) {
                manufacturer_seen = true;
                let value = after_colon(line);
                record.manufacturer = if value.is_empty() {
                    lines
                        .get(idx + 1)
                        .map(|next| next.trim().to_string())
                        .unwrap_or_default()
                } else {
                    value
                };
            }
        }

        debug!(
            "heuristic parse: name={:?} halal={} ingredients_len={}",
            record.product_name,
            record.halal_certified,
            record.ingredients.len()
        );
        record
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_choco_bar_scenario() {
        let text = "Choco Bar\nIngredients: Sugar, Cocoa\nJAKIM Certified\n";
        let record = HeuristicTextParser::new().extract(text);

        assert_eq!(record.product_name, "Choco Bar");
        assert!(record.ingredients.contains("Sugar, Cocoa"));
        assert!(record.halal_certified);
    }

    #[test]
    fn test_multi_line_ingredients_stop_at_blank_line() {
        let text = "X\nIngredients: A\nB\n\nManufactured by: Acme";
        let record = HeuristicTextParser::new().extract(text);

        assert_eq!(record.ingredients, "A B");
        assert_eq!(record.manufacturer, "Acme");
    }

    #[test]
    fn test_empty_input_yields_default_record() {
        let record = HeuristicTextParser::new().extract("");
        assert_eq!(record, ProductRecord::default());
    }

    #[test]
    fn test_halal_keywords_are_case_insensitive() {
        for text in ["100% HALAL", "Certified by Jakim", "MS 1500:2019", "Made in malaysia"] {
            let record = HeuristicTextParser::new().extract(text);
            assert!(record.halal_certified, "expected halal flag for {text:?}");
        }
    }

    #[test]
    fn test_no_keywords_leaves_halal_false() {
        let record = HeuristicTextParser::new().extract("Plain crackers\nWheat flour, salt");
        assert!(!record.halal_certified);
    }

    #[test]
    fn test_product_name_skips_short_lines() {
        let text = "AB\nXY\nProper Name\nAnother Long Line";
        let record = HeuristicTextParser::new().extract(text);
        assert_eq!(record.product_name, "Proper Name");
    }

    #[test]
    fn test_product_name_is_one_shot() {
        let text = "First Product\nSecond Product";
        let record = HeuristicTextParser::new().extract(text);
        assert_eq!(record.product_name, "First Product");
    }

    #[test]
    fn test_only_first_ingredients_section_is_captured() {
        let text = "Snack\nIngredients: Sugar\n\nIngredients: Salt";
        let record = HeuristicTextParser::new().extract(text);
        assert_eq!(record.ingredients, "Sugar");
    }

    #[test]
    fn test_ingredients_run_to_end_of_input() {
        let text = "Snack\nIngredients: Sugar\nCocoa\nMilk";
        let record = HeuristicTextParser::new().extract(text);
        assert_eq!(record.ingredients, "Sugar Cocoa Milk");
    }

    #[test]
    fn test_malay_markers() {
        let text = "Biskut Coklat\nRamuan: Gula, Koko\n\nDikeluarkan oleh: Syarikat Acme";
        let record = HeuristicTextParser::new().extract(text);

        assert_eq!(record.ingredients, "Gula, Koko");
        assert_eq!(record.manufacturer, "Syarikat Acme");
    }

    #[test]
    fn test_manufacturer_falls_back_to_next_line() {
        let text = "Snack Box\nManufactured by\nAcme Foods Sdn Bhd";
        let record = HeuristicTextParser::new().extract(text);
        assert_eq!(record.manufacturer, "Acme Foods Sdn Bhd");
    }

    #[test]
    fn test_manufacturer_marker_on_last_line_yields_empty() {
        let text = "Snack Box\nManufactured by";
        let record = HeuristicTextParser::new().extract(text);
        assert_eq!(record.manufacturer, "");
    }

    #[test]
    fn test_colonless_ingredients_marker_captures_following_lines() {
        let text = "Snack\nIngredients\nSugar\nSalt";
        let record = HeuristicTextParser::new().extract(text);
        assert_eq!(record.ingredients, "Sugar Salt");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "Choco Bar\nIngredients: Sugar, Cocoa\nJAKIM Certified\n";
        let parser = HeuristicTextParser::new();
        assert_eq!(parser.extract(text), parser.extract(text));
    }
}
