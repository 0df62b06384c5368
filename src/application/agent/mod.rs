mod errors;
mod models;
mod runner;

#[cfg(test)]
mod tests;

pub use errors::AgentError;
pub use models::{
    APOLOGY_REPLY, AgentOptions, DEFAULT_MAX_TOOL_ROUNDS, DEFAULT_SYSTEM_INSTRUCTION,
    FALLBACK_REPLY, ToolStep, TurnOutcome,
};
pub use runner::ChatAgent;
