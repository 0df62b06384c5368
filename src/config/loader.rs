use super::error::ConfigError;
use super::{AgentConfig, AppConfig, CONFIG_PATH, ExecutorStrategy, ProviderConfig, UpstreamConfig};
use dotenvy::dotenv;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::debug;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_API_PATH: &str = "v1beta/models";
const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
const DEFAULT_ECOMMERCE_BASE_URL: &str = "https://app.searchlift360.com/ecommerce/api/public";
const DEFAULT_HOTEL_BASE_URL: &str = "https://app.searchlift360.com/hotel/api/public";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 120;
const DEFAULT_PROXY_BASE_URL: &str = "http://localhost:8001";

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    pub model: Option<String>,
    pub system_instruction: Option<String>,
    #[serde(default)]
    pub provider: RawProvider,
    #[serde(default)]
    pub upstream: RawUpstream,
    #[serde(default)]
    pub agent: RawAgent,
}

#[derive(Debug, Deserialize, Default)]
pub(super) struct RawProvider {
    pub endpoint: Option<String>,
    pub api_path: Option<String>,
    pub api_key_env: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(super) struct RawUpstream {
    pub ecommerce_base_url: Option<String>,
    pub hotel_base_url: Option<String>,
    pub http_timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub(super) struct RawAgent {
    pub max_tool_rounds: Option<usize>,
    pub executor: Option<String>,
    pub proxy_base_url: Option<String>,
}

/// Ensures environment variables are loaded from .env once per process.
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = dotenv();
    });
}

pub(super) fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => {
            let default = Path::new(CONFIG_PATH);
            if default.exists() {
                read_config(default)
            } else {
                debug!("No configuration file found; using built-in defaults");
                validate_and_build(RawConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parsed: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let executor = match parsed.agent.executor.as_deref() {
        None => ExecutorStrategy::Direct,
        Some(value) => {
            ExecutorStrategy::parse(value).ok_or_else(|| ConfigError::UnknownExecutor {
                value: value.to_string(),
            })?
        }
    };

    let http_timeout_secs = parsed
        .upstream
        .http_timeout_secs
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
    if http_timeout_secs == 0 {
        return Err(ConfigError::InvalidTimeout);
    }

    Ok(AppConfig {
        model: parsed.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        system_instruction: parsed.system_instruction,
        provider: ProviderConfig {
            endpoint: parsed
                .provider
                .endpoint
                .unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.to_string()),
            api_path: parsed
                .provider
                .api_path
                .unwrap_or_else(|| DEFAULT_GEMINI_API_PATH.to_string()),
            api_key_env: parsed
                .provider
                .api_key_env
                .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string()),
        },
        upstream: UpstreamConfig {
            ecommerce_base_url: parsed
                .upstream
                .ecommerce_base_url
                .unwrap_or_else(|| DEFAULT_ECOMMERCE_BASE_URL.to_string()),
            hotel_base_url: parsed
                .upstream
                .hotel_base_url
                .unwrap_or_else(|| DEFAULT_HOTEL_BASE_URL.to_string()),
            http_timeout_secs,
        },
        agent: AgentConfig {
            max_tool_rounds: parsed
                .agent
                .max_tool_rounds
                .unwrap_or(crate::agent::DEFAULT_MAX_TOOL_ROUNDS),
            executor,
            proxy_base_url: parsed
                .agent
                .proxy_base_url
                .unwrap_or_else(|| DEFAULT_PROXY_BASE_URL.to_string()),
        },
    })
}
