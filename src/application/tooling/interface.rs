use super::error::ToolError;
use async_trait::async_trait;
use serde_json::Value;

/// Execution strategy for tool invocations requested by the model. One
/// strategy is chosen at construction time; the driver only sees this trait.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    async fn execute(&self, name: &str, args: Value) -> Result<Value, ToolError>;
}

/// Extract the product search term by its fixed key. Missing or non-string
/// values fall back to an empty term.
pub(crate) fn search_term(args: &Value) -> String {
    args.get("searchTerm")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Render a model-supplied argument object as query parameters. Nulls are
/// dropped; non-string scalars are stringified.
pub(crate) fn query_pairs(args: &Value) -> Vec<(String, String)> {
    let Some(map) = args.as_object() else {
        return Vec::new();
    };

    map.iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            (key.clone(), rendered)
        })
        .collect()
}
