//! In-process dispatch strategy: tool names map straight onto the upstream
//! API clients.

use super::error::ToolError;
use super::interface::{ToolExecutor, query_pairs, search_term};
use super::registry::CommerceTool;
use crate::upstream::{CatalogApi, HotelsApi};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

pub struct DirectExecutor {
    catalog: CatalogApi,
    hotels: HotelsApi,
}

impl DirectExecutor {
    pub fn new(catalog: CatalogApi, hotels: HotelsApi) -> Self {
        Self { catalog, hotels }
    }
}

#[async_trait]
impl ToolExecutor for DirectExecutor {
    async fn execute(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        let Some(tool) = CommerceTool::from_name(name) else {
            warn!(requested_tool = name, "Unknown tool requested by model");
            return Err(ToolError::UnknownTool(name.to_string()));
        };

        debug!(tool = name, "Dispatching tool in-process");
        match tool {
            CommerceTool::Categories => Ok(self.catalog.categories().await?),
            CommerceTool::Products => Ok(self.catalog.products().await?),
            CommerceTool::SearchProducts => {
                let term = search_term(&args);
                Ok(self.catalog.search_products(&term).await?)
            }
            CommerceTool::SearchHotels => Ok(self.hotels.search(&query_pairs(&args)).await?),
        }
    }
}
