//! Labeled-response parsing for vision model output.

use tracing::debug;

use super::{RecordExtractor, after_colon};
use crate::models::record::ProductRecord;

/// Parser for model responses in the fixed "Label: value" line pattern.
///
/// Each line is tested against the known label set; the value is everything
/// after the line's first colon, trimmed. A label appearing more than once
/// is overwritten sequentially, so the last occurrence wins. Labels that
/// never appear leave the field at its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabeledResponseParser;

impl LabeledResponseParser {
    /// Create a new labeled-response parser.
    pub fn new() -> Self {
        Self
    }
}

impl RecordExtractor for LabeledResponseParser {
    fn extract(&self, text: &str) -> ProductRecord {
        let mut record = ProductRecord::new();

        for line in text.lines() {
            if line.contains("Product Name:") {
                record.product_name = after_colon(line);
            } else if line.contains("Ingredients:") {
                record.ingredients = after_colon(line);
            } else if line.contains("Manufacturer:") {
                record.manufacturer = after_colon(line);
            } else if line.contains("Country of Origin:") {
                record.country_of_origin = after_colon(line);
            } else if line.contains("Halal Status:") {
                // Explicit positive marker only; "No" or garbage leaves false.
                if after_colon(line).contains("Yes") {
                    record.halal_certified = true;
                }
            }
        }

        debug!(
            "labeled parse: name={:?} halal={}",
            record.product_name, record.halal_certified
        );
        record
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_full_response() {
        let text = "Product Name: Choco Bar\n\
                    Ingredients: Sugar, Cocoa, Milk\n\
                    Manufacturer: Acme Foods\n\
                    Country of Origin: Malaysia\n\
                    Halal Status: Yes";

        let record = LabeledResponseParser::new().extract(text);

        assert_eq!(record.product_name, "Choco Bar");
        assert_eq!(record.ingredients, "Sugar, Cocoa, Milk");
        assert_eq!(record.manufacturer, "Acme Foods");
        assert_eq!(record.country_of_origin, "Malaysia");
        assert!(record.halal_certified);
    }

    #[test]
    fn test_no_matching_labels_yields_default_record() {
        let text = "The model refused to answer.\nPlease try another image.";
        let record = LabeledResponseParser::new().extract(text);
        assert_eq!(record, ProductRecord::default());
    }

    #[test]
    fn test_empty_input_yields_default_record() {
        let record = LabeledResponseParser::new().extract("");
        assert_eq!(record, ProductRecord::default());
    }

    #[test]
    fn test_halal_status_no_stays_false() {
        let record = LabeledResponseParser::new().extract("Halal Status: No");
        assert!(!record.halal_certified);
    }

    #[test]
    fn test_halal_status_yes_sets_true() {
        let text = "Halal Status: No\nHalal Status: Yes";
        let record = LabeledResponseParser::new().extract(text);
        assert!(record.halal_certified);
    }

    #[test]
    fn test_halal_status_is_case_sensitive() {
        let record = LabeledResponseParser::new().extract("Halal Status: yes");
        assert!(!record.halal_certified);
    }

    #[test]
    fn test_duplicate_label_last_occurrence_wins() {
        let text = "Product Name: First\nProduct Name: Second";
        let record = LabeledResponseParser::new().extract(text);
        assert_eq!(record.product_name, "Second");
    }

    #[test]
    fn test_missing_labels_leave_defaults() {
        let record = LabeledResponseParser::new().extract("Product Name: Solo");
        assert_eq!(record.product_name, "Solo");
        assert_eq!(record.ingredients, "");
        assert_eq!(record.manufacturer, "");
        assert_eq!(record.country_of_origin, "");
        assert!(!record.halal_certified);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "Product Name: Choco Bar\nHalal Status: Yes";
        let parser = LabeledResponseParser::new();
        assert_eq!(parser.extract(text), parser.extract(text));
    }
}
