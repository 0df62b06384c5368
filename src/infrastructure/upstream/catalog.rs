//! Client for the SearchLift360 ecommerce API.

use super::error::UpstreamError;
use super::http::ApiBase;
use reqwest::Client;
use serde_json::Value;

/// Read-only queries against the product catalog. Responses are passed
/// through as raw JSON; the upstream payload shape is documented by
/// [`crate::catalog::Category`] and [`crate::catalog::Product`].
#[derive(Clone)]
pub struct CatalogApi {
    base: ApiBase,
}

impl CatalogApi {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base: ApiBase::new(base_url, http),
        }
    }

    pub async fn categories(&self) -> Result<Value, UpstreamError> {
        self.base.get_json("categories", &[]).await
    }

    pub async fn products(&self) -> Result<Value, UpstreamError> {
        self.base.get_json("products", &[]).await
    }

    pub async fn search_products(&self, search_term: &str) -> Result<Value, UpstreamError> {
        self.base
            .get_json(
                "products/search",
                &[("searchTerm".to_string(), search_term.to_string())],
            )
            .await
    }
}
