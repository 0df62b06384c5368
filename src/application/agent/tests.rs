use super::*;
use crate::application::tooling::{DirectExecutor, ToolError, ToolExecutor, commerce_declarations};
use crate::model::{
    Content, FunctionCall, ModelClient, ModelError, ModelReply, ModelRequest, Part,
};
use crate::upstream::{CatalogApi, HotelsApi, UpstreamError};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::Mutex;

fn text_reply(text: &str) -> ModelReply {
    ModelReply::new(Some(Content {
        role: "model".to_string(),
        parts: vec![Part::text(text)],
    }))
}

fn tool_call_reply(name: &str, args: Value) -> ModelReply {
    ModelReply::new(Some(Content {
        role: "model".to_string(),
        parts: vec![Part {
            function_call: Some(FunctionCall {
                name: name.to_string(),
                args,
            }),
            ..Part::default()
        }],
    }))
}

#[derive(Clone)]
struct ScriptedProvider {
    replies: Arc<Mutex<Vec<ModelReply>>>,
    recordings: Arc<Mutex<Vec<ModelRequest>>>,
}

impl ScriptedProvider {
    fn new(replies: Vec<ModelReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies)),
            recordings: Arc::new(Mutex::new(Vec::new())),
        }
    }

    async fn requests(&self) -> Vec<ModelRequest> {
        self.recordings.lock().await.clone()
    }
}

#[async_trait]
impl ModelClient for ScriptedProvider {
    fn id(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, request: ModelRequest) -> Result<ModelReply, ModelError> {
        let mut replies = self.replies.lock().await;
        let reply = replies.remove(0);
        self.recordings.lock().await.push(request);
        Ok(reply)
    }
}

struct StubExecutor {
    result: Value,
    calls: Mutex<Vec<(String, Value)>>,
}

impl StubExecutor {
    fn new(result: Value) -> Self {
        Self {
            result,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ToolExecutor for StubExecutor {
    async fn execute(&self, name: &str, args: Value) -> Result<Value, ToolError> {
        self.calls.lock().await.push((name.to_string(), args));
        Ok(self.result.clone())
    }
}

struct FailingExecutor {
    error: Mutex<Option<ToolError>>,
}

impl FailingExecutor {
    fn new(error: ToolError) -> Self {
        Self {
            error: Mutex::new(Some(error)),
        }
    }
}

#[async_trait]
impl ToolExecutor for FailingExecutor {
    async fn execute(&self, _name: &str, _args: Value) -> Result<Value, ToolError> {
        Err(self
            .error
            .lock()
            .await
            .take()
            .expect("scripted failure available"))
    }
}

fn agent_with(
    provider: ScriptedProvider,
    executor: Arc<dyn ToolExecutor>,
) -> ChatAgent<ScriptedProvider> {
    ChatAgent::new(
        provider,
        executor,
        commerce_declarations(),
        AgentOptions::new("gemini-1.5-flash"),
    )
}

/// A genuine connectivity failure, as the proxy strategy would produce it.
async fn unreachable_tool_error() -> ToolError {
    let url = "http://127.0.0.1:0/hotels/search";
    let source = reqwest::Client::new()
        .get(url)
        .send()
        .await
        .expect_err("connection to port 0 must fail");
    ToolError::Upstream(UpstreamError::unreachable(url, source))
}

fn function_response_payload(request: &ModelRequest) -> &Value {
    let part = request
        .contents
        .last()
        .expect("request has contents")
        .parts
        .first()
        .expect("content has parts");
    &part
        .function_response
        .as_ref()
        .expect("function response part")
        .response
}

#[tokio::test]
async fn returns_model_text_unchanged_without_tools() {
    let provider = ScriptedProvider::new(vec![text_reply("Hello! How can I help?")]);
    let agent = agent_with(provider.clone(), Arc::new(StubExecutor::new(json!({}))));

    let outcome = agent
        .run_turn("hi".to_string())
        .await
        .expect("turn succeeds");

    assert_eq!(outcome.response, "Hello! How can I help?");
    assert!(outcome.steps.is_empty());

    let requests = provider.requests().await;
    assert_eq!(requests.len(), 1);
    let first = &requests[0];
    assert_eq!(first.contents.len(), 1);
    assert_eq!(first.contents[0].parts[0].text.as_deref(), Some("hi"));
    assert_eq!(first.tools.len(), 4);
    assert!(
        first
            .system_instruction
            .as_deref()
            .is_some_and(|system| system.contains("SearchLift360"))
    );
}

#[tokio::test]
async fn tool_results_are_wrapped_and_answered_in_strict_alternation() {
    let provider = ScriptedProvider::new(vec![
        tool_call_reply("search_products_tool", json!({"searchTerm": "accessories"})),
        text_reply("I found a Belt for you."),
    ]);
    let executor = Arc::new(StubExecutor::new(json!([
        {"id": 1, "name": "Belt", "price": "19.99"}
    ])));
    let agent = agent_with(provider.clone(), executor.clone());

    let outcome = agent
        .run_turn("Show me accessories".to_string())
        .await
        .expect("turn succeeds");

    assert_eq!(outcome.response, "I found a Belt for you.");
    assert_eq!(outcome.steps.len(), 1);
    assert_eq!(outcome.steps[0].tool, "search_products_tool");
    assert!(outcome.steps[0].success);
    assert_eq!(
        outcome.steps[0].response,
        json!({"results": [{"id": 1, "name": "Belt", "price": "19.99"}]})
    );

    let calls = executor.calls.lock().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "search_products_tool");
    assert_eq!(calls[0].1, json!({"searchTerm": "accessories"}));

    // The tool call is answered before the next model request: the second
    // request carries user prompt, model tool call, and the wrapped result.
    let requests = provider.requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].contents.len(), 1);
    assert_eq!(requests[1].contents.len(), 3);
    assert_eq!(
        function_response_payload(&requests[1]),
        &json!({"results": [{"id": 1, "name": "Belt", "price": "19.99"}]})
    );
}

#[tokio::test]
async fn executor_connectivity_failure_is_absorbed_into_the_conversation() {
    let provider = ScriptedProvider::new(vec![
        tool_call_reply("search_hotels_tool", json!({"location": "Hyderabad"})),
        text_reply("I could not reach the hotel service, please try later."),
    ]);
    let executor = Arc::new(FailingExecutor::new(unreachable_tool_error().await));
    let agent = agent_with(provider.clone(), executor);

    let outcome = agent
        .run_turn("Hotels in Hyderabad".to_string())
        .await
        .expect("turn still succeeds");

    assert_eq!(
        outcome.response,
        "I could not reach the hotel service, please try later."
    );
    assert_eq!(outcome.steps.len(), 1);
    assert!(!outcome.steps[0].success);

    let requests = provider.requests().await;
    assert_eq!(requests.len(), 2);
    let payload = function_response_payload(&requests[1]);
    let message = payload
        .get("error")
        .and_then(Value::as_str)
        .expect("error payload");
    assert!(message.starts_with("Failed to execute tool:"));
}

#[tokio::test]
async fn unknown_tool_is_reported_to_the_model_not_the_caller() {
    let provider = ScriptedProvider::new(vec![
        tool_call_reply("delete_everything_tool", json!({})),
        text_reply("That tool is not available."),
    ]);
    let http = reqwest::Client::new();
    let executor = Arc::new(DirectExecutor::new(
        CatalogApi::new("http://127.0.0.1:0", http.clone()),
        HotelsApi::new("http://127.0.0.1:0", http),
    ));
    let agent = agent_with(provider.clone(), executor);

    let outcome = agent
        .run_turn("please wipe the catalog".to_string())
        .await
        .expect("turn succeeds");

    assert_eq!(outcome.response, "That tool is not available.");
    let requests = provider.requests().await;
    let payload = function_response_payload(&requests[1]);
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some("Failed to execute tool: unknown tool: delete_everything_tool")
    );
}

#[tokio::test]
async fn empty_reply_returns_the_fixed_fallback() {
    let provider = ScriptedProvider::new(vec![ModelReply::new(None)]);
    let agent = agent_with(provider.clone(), Arc::new(StubExecutor::new(json!({}))));

    let outcome = agent
        .run_turn("anything".to_string())
        .await
        .expect("turn succeeds");

    assert_eq!(outcome.response, FALLBACK_REPLY);
    assert_eq!(provider.requests().await.len(), 1);
}

#[tokio::test]
async fn tool_round_budget_forces_fallback_answer() {
    let provider = ScriptedProvider::new(vec![
        tool_call_reply("get_products_tool", json!({})),
        tool_call_reply("get_products_tool", json!({})),
        tool_call_reply("get_products_tool", json!({})),
    ]);
    let executor = Arc::new(StubExecutor::new(json!({"results": []})));
    let mut options = AgentOptions::new("gemini-1.5-flash");
    options.max_tool_rounds = 2;
    let agent = ChatAgent::new(
        provider.clone(),
        executor,
        commerce_declarations(),
        options,
    );

    let outcome = agent
        .run_turn("loop forever".to_string())
        .await
        .expect("turn succeeds");

    assert_eq!(outcome.response, FALLBACK_REPLY);
    assert_eq!(outcome.steps.len(), 2);
    assert_eq!(provider.requests().await.len(), 3);
}

#[tokio::test]
async fn respond_substitutes_apology_when_the_model_is_unreachable() {
    struct DeadProvider;

    #[async_trait]
    impl ModelClient for DeadProvider {
        fn id(&self) -> &str {
            "dead"
        }

        async fn generate(&self, _request: ModelRequest) -> Result<ModelReply, ModelError> {
            Err(ModelError::missing_api_key("dead"))
        }
    }

    let agent = ChatAgent::new(
        DeadProvider,
        Arc::new(StubExecutor::new(json!({}))) as Arc<dyn ToolExecutor>,
        commerce_declarations(),
        AgentOptions::new("gemini-1.5-flash"),
    );

    let outcome = agent.respond("hello".to_string()).await;
    assert_eq!(outcome.response, APOLOGY_REPLY);
    assert!(outcome.steps.is_empty());
}
