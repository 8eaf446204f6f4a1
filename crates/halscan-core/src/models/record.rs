//! Product record data model.

use serde::{Deserialize, Serialize};

/// Sentinel the vision model emits when the ingredient list is unreadable.
pub const NOT_VISIBLE: &str = "Not Visible";

/// Sentinel for a database hit that carries no ingredient text.
pub const NOT_FOUND_IN_DB: &str = "Not found in DB";

/// Sentinel for a database hit that carries no brand or country data.
pub const UNKNOWN: &str = "Unknown";

/// Column order used by every tabular rendering of a record.
pub const COLUMNS: [&str; 5] = [
    "Product Name",
    "Ingredients",
    "Manufacturer",
    "Country",
    "Halal Certified",
];

/// Structured data extracted from a single product label.
///
/// All string fields default to empty and `halal_certified` defaults to
/// false; only an explicit positive signal in the source text sets it true.
/// A record is built fresh per extraction call and never mutated by the
/// extractor afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    /// Product name as printed on the packaging.
    pub product_name: String,

    /// Ingredient list, or a sentinel when unavailable.
    pub ingredients: String,

    /// Manufacturing company.
    pub manufacturer: String,

    /// Country of origin ("Made in ..." or address-derived).
    pub country_of_origin: String,

    /// Whether a halal certification mark was found.
    pub halal_certified: bool,
}

impl ProductRecord {
    /// Create a new all-default record.
    pub fn new() -> Self {
        Self::default()
    }

    /// "Yes"/"No" rendering of the certification flag, used by all exports.
    pub fn halal_display(&self) -> &'static str {
        if self.halal_certified { "Yes" } else { "No" }
    }

    /// Field values in canonical column order (see [`COLUMNS`]).
    pub fn values(&self) -> [String; 5] {
        [
            self.product_name.clone(),
            self.ingredients.clone(),
            self.manufacturer.clone(),
            self.country_of_origin.clone(),
            self.halal_display().to_string(),
        ]
    }
}
