mod docs;
mod dto;
mod error;
mod router;
mod routes;
mod state;

pub use error::ServerError;
pub(crate) use state::ServerState;

use crate::agent::ChatAgent;
use crate::model::ModelClient;
use crate::upstream::{CatalogApi, HotelsApi};
use std::net::SocketAddr;

pub async fn serve<P>(
    agent: ChatAgent<P>,
    catalog: CatalogApi,
    hotels: HotelsApi,
    addr: SocketAddr,
) -> Result<(), ServerError>
where
    P: ModelClient + 'static,
{
    router::serve(ServerState::new(agent, catalog, hotels), addr).await
}
