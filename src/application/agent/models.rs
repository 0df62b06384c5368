use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

pub const DEFAULT_MAX_TOOL_ROUNDS: usize = 8;

/// Substituted when the model stops without a tool call or usable text.
pub const FALLBACK_REPLY: &str =
    "I have processed your request. Is there anything else I can help with?";

/// Substituted when the turn itself fails. The boundary always returns text.
pub const APOLOGY_REPLY: &str = "I'm sorry, but I encountered an error while trying to process \
     your request. Please try again later.";

pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a helpful and friendly assistant for a \
     conversational commerce application. Your goal is to help users find products and hotels \
     using the SearchLift360 platform. You have access to the following tools: get categories \
     (to browse product categories), get all products, search products by keywords, and search \
     hotels by location. When you receive results from a tool, present them clearly and \
     concisely to the user with relevant details like prices, descriptions, and availability. \
     Do not make up information. If a tool call fails, inform the user gracefully and suggest \
     alternatives.";

#[derive(Debug, Clone)]
pub struct AgentOptions {
    pub model: String,
    pub system_instruction: String,
    pub max_tool_rounds: usize,
}

impl AgentOptions {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            max_tool_rounds: DEFAULT_MAX_TOOL_ROUNDS,
        }
    }
}

/// One executed tool round within a turn.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ToolStep {
    pub tool: String,
    #[schema(value_type = Object)]
    pub input: Value,
    pub success: bool,
    #[schema(value_type = Object)]
    pub response: Value,
}

#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub response: String,
    pub steps: Vec<ToolStep>,
}
