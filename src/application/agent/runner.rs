use super::errors::AgentError;
use super::models::{AgentOptions, FALLBACK_REPLY, ToolStep, TurnOutcome};
use crate::application::tooling::ToolExecutor;
use crate::model::{Content, ModelClient, ModelRequest, ModelTurn, ToolDeclaration};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Drives one conversational turn: prompt in, exactly one text answer out,
/// with zero or more tool round-trips in between.
pub struct ChatAgent<P: ModelClient> {
    provider: P,
    executor: Arc<dyn ToolExecutor>,
    declarations: Vec<ToolDeclaration>,
    options: AgentOptions,
}

impl<P: ModelClient> ChatAgent<P> {
    pub fn new(
        provider: P,
        executor: Arc<dyn ToolExecutor>,
        declarations: Vec<ToolDeclaration>,
        options: AgentOptions,
    ) -> Self {
        Self {
            provider,
            executor,
            declarations,
            options,
        }
    }

    pub fn declarations(&self) -> &[ToolDeclaration] {
        &self.declarations
    }

    /// The externally callable seam: always yields text. Turn failures are
    /// logged and replaced with the fixed apology.
    pub async fn respond(&self, prompt: String) -> TurnOutcome {
        match self.run_turn(prompt).await {
            Ok(outcome) => outcome,
            Err(error) => {
                error!(%error, "Turn failed; substituting apology response");
                TurnOutcome {
                    response: error.user_message(),
                    steps: Vec::new(),
                }
            }
        }
    }

    pub async fn run_turn(&self, prompt: String) -> Result<TurnOutcome, AgentError> {
        let turn = Uuid::new_v4();
        info!(turn = %turn, "Turn started");

        let mut contents = vec![Content::user_text(prompt)];
        let mut steps: Vec<ToolStep> = Vec::new();
        let mut remaining_rounds = self.options.max_tool_rounds;

        loop {
            debug!(
                turn = %turn,
                exchanges = contents.len(),
                remaining_rounds,
                "Requesting model reply"
            );
            let reply = self
                .provider
                .generate(ModelRequest {
                    model: self.options.model.clone(),
                    system_instruction: Some(self.options.system_instruction.clone()),
                    contents: contents.clone(),
                    tools: self.declarations.clone(),
                })
                .await?;

            match reply.turn() {
                ModelTurn::Text(text) => {
                    info!(turn = %turn, steps = steps.len(), "Turn finished with model text");
                    return Ok(TurnOutcome {
                        response: text,
                        steps,
                    });
                }
                ModelTurn::Empty => {
                    warn!(turn = %turn, "Model reply had no tool call or text; using fallback");
                    return Ok(TurnOutcome {
                        response: FALLBACK_REPLY.to_string(),
                        steps,
                    });
                }
                ModelTurn::ToolCall(call) => {
                    if remaining_rounds == 0 {
                        warn!(
                            turn = %turn,
                            tool = %call.name,
                            "Tool round budget exhausted; using fallback"
                        );
                        return Ok(TurnOutcome {
                            response: FALLBACK_REPLY.to_string(),
                            steps,
                        });
                    }
                    remaining_rounds -= 1;

                    if let Some(content) = reply.content {
                        contents.push(content);
                    }

                    info!(turn = %turn, tool = %call.name, "Model requested tool execution");
                    let (payload, success) =
                        match self.executor.execute(&call.name, call.args.clone()).await {
                            Ok(value) => (wrap_tool_payload(value), true),
                            Err(error) => {
                                warn!(
                                    turn = %turn,
                                    tool = %call.name,
                                    %error,
                                    "Tool execution failed; reporting error to model"
                                );
                                (
                                    json!({ "error": format!("Failed to execute tool: {error}") }),
                                    false,
                                )
                            }
                        };

                    steps.push(ToolStep {
                        tool: call.name.clone(),
                        input: call.args,
                        success,
                        response: payload.clone(),
                    });
                    contents.push(Content::function_response(call.name, payload));
                }
            }
        }
    }
}

/// The model-facing protocol requires an object-shaped response body, so a
/// bare list result is wrapped before transmission.
fn wrap_tool_payload(value: Value) -> Value {
    match value {
        Value::Array(items) => json!({ "results": items }),
        other => other,
    }
}
