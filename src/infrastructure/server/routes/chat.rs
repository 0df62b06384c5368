use super::super::dto::{ChatRequest, ChatResponse, ErrorResponse};
use super::super::state::ServerState;
use crate::model::ModelClient;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{error, info};

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Conversational exchange completed", body = ChatResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn chat_handler<P: ModelClient>(
    State(state): State<Arc<ServerState<P>>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    if payload.prompt.trim().is_empty() {
        error!("Rejecting /chat request due to empty prompt");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "prompt cannot be empty".to_string(),
            }),
        ));
    }

    info!(history = payload.history.len(), "Received /chat request");
    let outcome = state.agent().respond(payload.prompt).await;
    Ok(Json(ChatResponse {
        response: outcome.response,
    }))
}
