//! OpenFoodFacts product search client.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::LookupError;
use crate::models::config::LookupConfig;
use crate::models::record::{NOT_FOUND_IN_DB, UNKNOWN};

/// Best-effort data returned by the product database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// Ingredient text, or [`NOT_FOUND_IN_DB`] when the hit carries none.
    pub ingredients: String,
    /// Country list, or [`UNKNOWN`].
    pub country: String,
    /// Brand name, or [`UNKNOWN`].
    pub manufacturer: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<ProductHit>,
}

#[derive(Deserialize, Default)]
struct ProductHit {
    #[serde(default)]
    ingredients_text: Option<String>,
    #[serde(default)]
    brands: Option<String>,
    #[serde(default)]
    countries: Option<String>,
}

/// Read-only client for the OpenFoodFacts search endpoint.
pub struct OpenFoodFactsClient {
    endpoint: String,
    client: reqwest::Client,
}

impl OpenFoodFactsClient {
    /// Create a client from configuration.
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("halscan/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    /// Search the database for a product name and map the best hit.
    ///
    /// One request, fixed timeout, no retry. Every failure mode — network,
    /// timeout, bad status, malformed body — degrades to `None` so the
    /// caller can continue with whatever it already extracted.
    pub async fn search(&self, product_name: &str) -> Option<LookupResult> {
        match self.try_search(product_name).await {
            Ok(result) => result,
            Err(e) => {
                warn!("product lookup failed for {product_name:?}: {e}");
                None
            }
        }
    }

    async fn try_search(&self, product_name: &str) -> Result<Option<LookupResult>, LookupError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("search_terms", product_name),
                ("search_simple", "1"),
                ("action", "process"),
                ("json", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        if body.products.is_empty() {
            debug!("no products matched {product_name:?}");
        }

        Ok(map_response(body))
    }
}

/// Take the first product unconditionally; no ranking was ever part of the
/// contract. Missing sub-fields become sentinels.
fn map_response(body: SearchResponse) -> Option<LookupResult> {
    let first = body.products.into_iter().next()?;

    Some(LookupResult {
        ingredients: first
            .ingredients_text
            .unwrap_or_else(|| NOT_FOUND_IN_DB.to_string()),
        country: first.countries.unwrap_or_else(|| UNKNOWN.to_string()),
        manufacturer: first.brands.unwrap_or_else(|| UNKNOWN.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(body: &str) -> SearchResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_first_product_wins() {
        let body = parse(
            r#"{"products": [
                {"ingredients_text": "Sugar, Cocoa", "brands": "Acme", "countries": "Malaysia"},
                {"ingredients_text": "Salt", "brands": "Other", "countries": "France"}
            ]}"#,
        );

        let result = map_response(body).unwrap();
        assert_eq!(result.ingredients, "Sugar, Cocoa");
        assert_eq!(result.manufacturer, "Acme");
        assert_eq!(result.country, "Malaysia");
    }

    #[test]
    fn test_missing_subfields_become_sentinels() {
        let body = parse(r#"{"products": [{}]}"#);

        let result = map_response(body).unwrap();
        assert_eq!(result.ingredients, NOT_FOUND_IN_DB);
        assert_eq!(result.country, UNKNOWN);
        assert_eq!(result.manufacturer, UNKNOWN);
    }

    #[test]
    fn test_empty_product_list_is_a_miss() {
        let body = parse(r#"{"products": []}"#);
        assert_eq!(map_response(body), None);
    }

    #[test]
    fn test_absent_products_key_is_a_miss() {
        let body = parse("{}");
        assert_eq!(map_response(body), None);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_degrades_to_none() {
        let config = LookupConfig {
            endpoint: "http://127.0.0.1:9/search.pl".to_string(),
            timeout_secs: 1,
        };
        let client = OpenFoodFactsClient::new(&config).unwrap();

        assert_eq!(client.search("Choco Bar").await, None);
    }
}
