//! Model types - request, reply, transcript, and error types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;
use utoipa::ToSchema;

/// One generation request against the model endpoint.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub model: String,
    pub system_instruction: Option<String>,
    pub contents: Vec<Content>,
    pub tools: Vec<ToolDeclaration>,
}

/// The model's reply: at most one content block.
#[derive(Debug, Clone, Default)]
pub struct ModelReply {
    pub content: Option<Content>,
}

impl ModelReply {
    pub fn new(content: Option<Content>) -> Self {
        Self { content }
    }

    /// Classify the reply. A function-call part wins over text; a reply with
    /// neither (or only blank text) is Empty.
    pub fn turn(&self) -> ModelTurn {
        let Some(content) = &self.content else {
            return ModelTurn::Empty;
        };

        for part in &content.parts {
            if let Some(call) = &part.function_call {
                return ModelTurn::ToolCall(call.clone());
            }
        }

        for part in &content.parts {
            if let Some(text) = &part.text {
                if !text.trim().is_empty() {
                    return ModelTurn::Text(text.clone());
                }
            }
        }

        ModelTurn::Empty
    }
}

/// What the driver should do with a model reply.
#[derive(Debug, Clone)]
pub enum ModelTurn {
    ToolCall(FunctionCall),
    Text(String),
    Empty,
}

/// One entry in the conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part::text(text)],
        }
    }

    /// Tool results travel back to the model as a user-role content carrying
    /// a single function-response part.
    pub fn function_response(name: impl Into<String>, response: Value) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part::function_response(name, response)],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_response: Option<FunctionResponse>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn function_response(name: impl Into<String>, response: Value) -> Self {
        Self {
            function_response: Some(FunctionResponse {
                name: name.into(),
                response,
            }),
            ..Self::default()
        }
    }
}

/// Tool invocation requested by the model. Arguments are passed through
/// verbatim; no coercion happens before the executor sees them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionResponse {
    pub name: String,
    pub response: Value,
}

/// Declaration of a callable tool, in the shape the model endpoint consumes.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ToolDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: ParameterSchema,
}

impl ToolDeclaration {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: ParameterSchema::object(),
        }
    }

    pub fn with_param(
        mut self,
        name: impl Into<String>,
        param_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.parameters.properties.insert(
            name.into(),
            ParameterSpec {
                param_type: param_type.into(),
                description: description.into(),
            },
        );
        self
    }

    pub fn with_required_param(
        mut self,
        name: impl Into<String>,
        param_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        self.parameters.required.push(name.clone());
        self.with_param(name, param_type, description)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ParameterSchema {
    #[serde(rename = "type")]
    pub schema_type: String,
    pub properties: BTreeMap<String, ParameterSpec>,
    pub required: Vec<String>,
}

impl ParameterSchema {
    pub fn object() -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ParameterSpec {
    #[serde(rename = "type")]
    pub param_type: String,
    pub description: String,
}

/// Model errors
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("provider '{provider}' requires an API key")]
    MissingApiKey { provider: String },
    #[error("network error calling provider '{provider}': {source}")]
    Network {
        provider: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("provider '{provider}' returned invalid response: {reason}")]
    InvalidResponse { provider: String, reason: String },
}

impl ModelError {
    pub fn missing_api_key(provider: impl Into<String>) -> Self {
        Self::MissingApiKey {
            provider: provider.into(),
        }
    }

    pub fn network(provider: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            provider: provider.into(),
            source,
        }
    }

    pub fn invalid_response(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            provider: provider.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn function_call_part_wins_over_text() {
        let reply = ModelReply::new(Some(Content {
            role: "model".to_string(),
            parts: vec![
                Part::text("thinking out loud"),
                Part {
                    function_call: Some(FunctionCall {
                        name: "search_products_tool".to_string(),
                        args: json!({"searchTerm": "shoes"}),
                    }),
                    ..Part::default()
                },
            ],
        }));

        match reply.turn() {
            ModelTurn::ToolCall(call) => assert_eq!(call.name, "search_products_tool"),
            other => panic!("expected tool call, got {other:?}"),
        }
    }

    #[test]
    fn blank_text_reply_is_empty() {
        let reply = ModelReply::new(Some(Content {
            role: "model".to_string(),
            parts: vec![Part::text("   \n")],
        }));
        assert!(matches!(reply.turn(), ModelTurn::Empty));

        let reply = ModelReply::new(None);
        assert!(matches!(reply.turn(), ModelTurn::Empty));
    }

    #[test]
    fn function_response_content_serializes_to_wire_shape() {
        let content = Content::function_response(
            "get_products_tool",
            json!({"results": [{"id": 1}]}),
        );

        let value = serde_json::to_value(&content).expect("content serializes");
        assert_eq!(
            value,
            json!({
                "role": "user",
                "parts": [{
                    "functionResponse": {
                        "name": "get_products_tool",
                        "response": {"results": [{"id": 1}]}
                    }
                }]
            })
        );
    }

    #[test]
    fn function_call_part_deserializes_from_wire_shape() {
        let content: Content = serde_json::from_value(json!({
            "role": "model",
            "parts": [{
                "functionCall": {
                    "name": "search_hotels_tool",
                    "args": {"location": "Hyderabad"}
                }
            }]
        }))
        .expect("content deserializes");

        let call = content.parts[0]
            .function_call
            .as_ref()
            .expect("function call part");
        assert_eq!(call.name, "search_hotels_tool");
        assert_eq!(call.args, json!({"location": "Hyderabad"}));
    }
}
