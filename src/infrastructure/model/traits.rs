//! Model traits

use super::types::{ModelError, ModelReply, ModelRequest};
use async_trait::async_trait;

/// Trait for model provider implementations
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Get the client ID
    fn id(&self) -> &str;

    /// Send one generation request and return the model's reply
    async fn generate(&self, request: ModelRequest) -> Result<ModelReply, ModelError>;
}
