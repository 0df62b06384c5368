//! Gemini client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::env;
use tracing::{debug, info, warn};

use super::traits::ModelClient;
use super::types::{Content, ModelError, ModelReply, ModelRequest};
use crate::config::ProviderConfig;

const PROVIDER_ID: &str = "gemini";

/// Gemini client for Google AI
#[derive(Clone)]
pub struct GeminiClient {
    endpoint: String,
    api_path: String,
    api_key: Option<String>,
    http: Client,
}

impl GeminiClient {
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            api_path: config.api_path.clone(),
            api_key: resolve_api_key(&config.api_key_env),
            http: Client::new(),
        }
    }

    fn build_model_url(&self, model: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        format!("{base}/{}/{model}:generateContent", self.api_path)
    }

    fn require_api_key(&self) -> Result<&str, ModelError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ModelError::missing_api_key(PROVIDER_ID))
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    async fn generate(&self, request: ModelRequest) -> Result<ModelReply, ModelError> {
        let url = self.build_model_url(&request.model);

        let mut payload = json!({
            "contents": request.contents,
        });

        if let Some(system) = &request.system_instruction {
            payload["system_instruction"] = json!({
                "parts": [{"text": system}]
            });
        }

        if !request.tools.is_empty() {
            payload["tools"] = json!([{
                "function_declarations": request.tools
            }]);
        }

        info!(
            model = request.model.as_str(),
            contents = request.contents.len(),
            tools = request.tools.len(),
            "Sending request to Gemini"
        );

        let api_key = self.require_api_key()?;
        let url_with_key = format!("{url}?key={api_key}");

        let response: GenerateContentResponse = self
            .http
            .post(&url_with_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ModelError::network(PROVIDER_ID, e))?
            .error_for_status()
            .map_err(|e| ModelError::network(PROVIDER_ID, e))?
            .json()
            .await
            .map_err(|e| ModelError::invalid_response(PROVIDER_ID, e.to_string()))?;
        debug!("Received response from Gemini");

        let content = response
            .candidates
            .unwrap_or_default()
            .into_iter()
            .find_map(|candidate| candidate.content);

        Ok(ModelReply::new(content))
    }
}

/// Resolve an API key from the named environment variable.
fn resolve_api_key(env_var: &str) -> Option<String> {
    let name = env_var.trim();
    if name.is_empty() {
        return None;
    }
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => {
            warn!(env_var = name, "API key environment variable is not set");
            None
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<Content>,
}
