use crate::upstream::UpstreamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}
