//! Remote-proxy strategy: tool calls become HTTP GETs against the local REST
//! surface, using the fixed per-tool path mapping.

use super::error::ToolError;
use super::interface::{ToolExecutor, query_pairs, search_term};
use super::registry::CommerceTool;
use crate::upstream::ApiBase;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

pub struct ProxyExecutor {
    base: ApiBase,
}

impl ProxyExecutor {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base: ApiBase::new(base_url, http),
        }
    }
}

#[async_trait]
impl ToolExecutor for ProxyExecutor {
    async fn execute(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        let Some(tool) = CommerceTool::from_name(name) else {
            warn!(requested_tool = name, "Unknown tool requested by model");
            return Err(ToolError::UnknownTool(name.to_string()));
        };

        debug!(tool = name, "Dispatching tool via local service boundary");
        let result = match tool {
            CommerceTool::Categories => self.base.get_json("categories", &[]).await?,
            CommerceTool::Products => self.base.get_json("products", &[]).await?,
            CommerceTool::SearchProducts => {
                let term = search_term(&args);
                self.base
                    .get_json("products/search", &[("searchTerm".to_string(), term)])
                    .await?
            }
            CommerceTool::SearchHotels => {
                self.base
                    .get_json("hotels/search", &query_pairs(&args))
                    .await?
            }
        };
        Ok(result)
    }
}
