//! Base HTTP client with shared logic

use super::error::UpstreamError;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Shared GET-and-decode plumbing for the upstream API clients.
#[derive(Clone)]
pub(crate) struct ApiBase {
    base_url: String,
    http: Client,
}

impl ApiBase {
    pub(crate) fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    pub(crate) fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    pub(crate) async fn get_json(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Value, UpstreamError> {
        let url = self.build_url(path);
        debug!(url = url.as_str(), "Dispatching upstream GET request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| UpstreamError::unreachable(&url, source))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                url = url.as_str(),
                status = status.as_u16(),
                "Upstream returned error status"
            );
            return Err(UpstreamError::status(&url, status, body));
        }

        response
            .json()
            .await
            .map_err(|source| UpstreamError::decode(&url, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_segments_without_duplicate_slashes() {
        let base = ApiBase::new("https://example.test/api/public/", Client::new());
        assert_eq!(
            base.build_url("/products/search"),
            "https://example.test/api/public/products/search"
        );
    }
}
