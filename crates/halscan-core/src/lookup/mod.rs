//! Product database lookup.

mod openfoodfacts;

pub use openfoodfacts::{LookupResult, OpenFoodFactsClient};
