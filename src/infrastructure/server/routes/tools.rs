use super::super::dto::ToolInventoryResponse;
use super::super::state::ServerState;
use crate::model::ModelClient;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;
use tracing::debug;

#[utoipa::path(
    get,
    path = "/tools",
    tag = "tools",
    responses(
        (status = 200, description = "Tool declarations offered to the model", body = ToolInventoryResponse)
    )
)]
pub async fn tools_handler<P: ModelClient>(
    State(state): State<Arc<ServerState<P>>>,
) -> Json<ToolInventoryResponse> {
    let tools = state.agent().declarations().to_vec();
    debug!(tool_count = tools.len(), "Serving /tools request");
    Json(ToolInventoryResponse { tools })
}
