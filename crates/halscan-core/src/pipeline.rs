//! Fallback merge between extracted records and database lookups.

use crate::lookup::LookupResult;
use crate::models::record::{NOT_VISIBLE, ProductRecord};

/// Ingredient strings shorter than this trigger the database fallback.
const MIN_INGREDIENTS_LEN: usize = 5;

/// Whether the extracted record warrants a database lookup.
///
/// True when the extractor reported the "not visible" sentinel or produced
/// something too short to be a real ingredient list.
pub fn needs_lookup_fallback(record: &ProductRecord) -> bool {
    record.ingredients == NOT_VISIBLE || record.ingredients.len() < MIN_INGREDIENTS_LEN
}

/// Merge a lookup hit into the record.
///
/// Ingredients are overwritten unconditionally; the country only fills an
/// empty field, so origin data already read off the label is never
/// clobbered. The lookup's brand is informational and never merged.
pub fn apply_lookup_fallback(record: &mut ProductRecord, result: &LookupResult) {
    record.ingredients = result.ingredients.clone();
    if record.country_of_origin.is_empty() {
        record.country_of_origin = result.country.clone();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_hit() -> LookupResult {
        LookupResult {
            ingredients: "Sugar, Cocoa, Milk".to_string(),
            country: "Malaysia".to_string(),
            manufacturer: "Acme".to_string(),
        }
    }

    #[test]
    fn test_sentinel_triggers_fallback() {
        let record = ProductRecord {
            ingredients: NOT_VISIBLE.to_string(),
            ..Default::default()
        };
        assert!(needs_lookup_fallback(&record));
    }

    #[test]
    fn test_short_ingredients_trigger_fallback() {
        let record = ProductRecord {
            ingredients: "Egg".to_string(),
            ..Default::default()
        };
        assert!(needs_lookup_fallback(&record));
    }

    #[test]
    fn test_real_ingredients_skip_fallback() {
        let record = ProductRecord {
            ingredients: "Sugar, Cocoa".to_string(),
            ..Default::default()
        };
        assert!(!needs_lookup_fallback(&record));
    }

    #[test]
    fn test_merge_overwrites_ingredients_unconditionally() {
        let mut record = ProductRecord {
            ingredients: NOT_VISIBLE.to_string(),
            ..Default::default()
        };
        apply_lookup_fallback(&mut record, &lookup_hit());
        assert_eq!(record.ingredients, "Sugar, Cocoa, Milk");
    }

    #[test]
    fn test_merge_fills_empty_country_only() {
        let mut record = ProductRecord::default();
        apply_lookup_fallback(&mut record, &lookup_hit());
        assert_eq!(record.country_of_origin, "Malaysia");

        let mut record = ProductRecord {
            country_of_origin: "Indonesia".to_string(),
            ..Default::default()
        };
        apply_lookup_fallback(&mut record, &lookup_hit());
        assert_eq!(record.country_of_origin, "Indonesia");
    }

    #[test]
    fn test_merge_never_touches_manufacturer() {
        let mut record = ProductRecord::default();
        apply_lookup_fallback(&mut record, &lookup_hit());
        assert_eq!(record.manufacturer, "");
    }

    #[test]
    fn test_lookup_miss_leaves_sentinel() {
        // The caller only merges on Some; a miss keeps the record as-is.
        let record = ProductRecord {
            ingredients: NOT_VISIBLE.to_string(),
            ..Default::default()
        };
        assert!(needs_lookup_fallback(&record));
        assert_eq!(record.ingredients, NOT_VISIBLE);
    }
}
