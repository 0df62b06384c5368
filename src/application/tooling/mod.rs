mod direct;
mod error;
mod interface;
mod proxy;
mod registry;

pub use direct::DirectExecutor;
pub use error::ToolError;
pub use interface::ToolExecutor;
pub use proxy::ProxyExecutor;
pub use registry::{
    GET_CATEGORIES_TOOL, GET_PRODUCTS_TOOL, SEARCH_HOTELS_TOOL, SEARCH_PRODUCTS_TOOL,
    commerce_declarations,
};
