use super::super::dto::{ErrorResponse, ProductSearchParams};
use super::super::state::ServerState;
use super::upstream_error_response;
use crate::catalog::{Category, Product};
use crate::model::ModelClient;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

#[utoipa::path(
    get,
    path = "/categories",
    tag = "ecommerce",
    responses(
        (status = 200, description = "All product categories", body = Vec<Category>),
        (status = 503, description = "Upstream API unreachable", body = ErrorResponse)
    )
)]
pub async fn categories_handler<P: ModelClient>(
    State(state): State<Arc<ServerState<P>>>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    debug!("Serving /categories request");
    state
        .catalog()
        .categories()
        .await
        .map(Json)
        .map_err(upstream_error_response)
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "ecommerce",
    responses(
        (status = 200, description = "All products with their category", body = Vec<Product>),
        (status = 503, description = "Upstream API unreachable", body = ErrorResponse)
    )
)]
pub async fn products_handler<P: ModelClient>(
    State(state): State<Arc<ServerState<P>>>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    debug!("Serving /products request");
    state
        .catalog()
        .products()
        .await
        .map(Json)
        .map_err(upstream_error_response)
}

#[utoipa::path(
    get,
    path = "/products/search",
    tag = "ecommerce",
    params(ProductSearchParams),
    responses(
        (status = 200, description = "Products matching the search term", body = Vec<Product>),
        (status = 503, description = "Upstream API unreachable", body = ErrorResponse)
    )
)]
pub async fn search_products_handler<P: ModelClient>(
    State(state): State<Arc<ServerState<P>>>,
    Query(params): Query<ProductSearchParams>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    debug!(
        search_term = params.search_term.as_str(),
        "Serving /products/search request"
    );
    state
        .catalog()
        .search_products(&params.search_term)
        .await
        .map(Json)
        .map_err(upstream_error_response)
}
