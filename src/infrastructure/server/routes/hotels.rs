use super::super::dto::{ErrorResponse, HotelSearchParams};
use super::super::state::ServerState;
use super::upstream_error_response;
use crate::catalog::HotelSearchResponse;
use crate::model::ModelClient;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

#[utoipa::path(
    get,
    path = "/hotels/search",
    tag = "hotels",
    params(HotelSearchParams),
    responses(
        (status = 200, description = "Hotels matching the criteria", body = HotelSearchResponse),
        (status = 503, description = "Upstream API unreachable", body = ErrorResponse)
    )
)]
pub async fn search_hotels_handler<P: ModelClient>(
    State(state): State<Arc<ServerState<P>>>,
    Query(params): Query<HotelSearchParams>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    debug!(
        location = params.location.as_str(),
        "Serving /hotels/search request"
    );
    state
        .hotels()
        .search(&params.to_query())
        .await
        .map(Json)
        .map_err(upstream_error_response)
}
