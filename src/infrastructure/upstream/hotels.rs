//! Client for the SearchLift360 hotel API.

use super::error::UpstreamError;
use super::http::ApiBase;
use reqwest::Client;
use serde_json::Value;

/// Hotel search against the upstream hotel API. The payload shape is
/// documented by [`crate::catalog::HotelSearchResponse`].
#[derive(Clone)]
pub struct HotelsApi {
    base: ApiBase,
}

impl HotelsApi {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base: ApiBase::new(base_url, http),
        }
    }

    pub async fn search(&self, query: &[(String, String)]) -> Result<Value, UpstreamError> {
        self.base.get_json("search", query).await
    }
}
