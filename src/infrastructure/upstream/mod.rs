mod catalog;
mod error;
mod hotels;
mod http;

pub use catalog::CatalogApi;
pub use error::UpstreamError;
pub use hotels::HotelsApi;
pub(crate) use http::ApiBase;
