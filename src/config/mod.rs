mod error;
mod loader;

pub use error::ConfigError;

use std::path::Path;

/// Default configuration file path, relative to the working directory.
pub const CONFIG_PATH: &str = "config/assistant.toml";

/// Application configuration, immutable after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model: String,
    pub system_instruction: Option<String>,
    pub provider: ProviderConfig,
    pub upstream: UpstreamConfig,
    pub agent: AgentConfig,
}

impl AppConfig {
    /// Load configuration from a file path (or defaults if None and the
    /// default path does not exist).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        loader::load_config(path)
    }
}

/// Connection settings for the model endpoint.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub api_path: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

/// Base addresses and timeout for the SearchLift360 APIs.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub ecommerce_base_url: String,
    pub hotel_base_url: String,
    pub http_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub max_tool_rounds: usize,
    pub executor: ExecutorStrategy,
    /// Base address the proxy strategy calls; unused by the direct strategy.
    pub proxy_base_url: String,
}

/// Which tool execution strategy to construct at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorStrategy {
    Direct,
    Proxy,
}

impl ExecutorStrategy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "direct" => Some(Self::Direct),
            "proxy" => Some(Self::Proxy),
            _ => None,
        }
    }
}
