use super::dto::{ChatRequest, ChatResponse, ErrorResponse, ToolInventoryResponse};
use super::routes;
use crate::catalog::{Category, Hotel, HotelSearchResponse, Product};
use crate::model::{ParameterSchema, ParameterSpec, ToolDeclaration};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::chat::chat_handler,
        routes::catalog::categories_handler,
        routes::catalog::products_handler,
        routes::catalog::search_products_handler,
        routes::hotels::search_hotels_handler,
        routes::tools::tools_handler
    ),
    components(
        schemas(
            ChatRequest,
            ChatResponse,
            ErrorResponse,
            ToolInventoryResponse,
            ToolDeclaration,
            ParameterSchema,
            ParameterSpec,
            Category,
            Product,
            Hotel,
            HotelSearchResponse
        )
    ),
    tags(
        (name = "chat", description = "Conversational exchange with the assistant"),
        (name = "ecommerce", description = "Pass-through catalog queries against SearchLift360"),
        (name = "hotels", description = "Pass-through hotel search against SearchLift360"),
        (name = "tools", description = "Tool declarations offered to the model")
    )
)]
pub(super) struct ApiDoc;
