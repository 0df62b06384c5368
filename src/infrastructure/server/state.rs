use crate::agent::ChatAgent;
use crate::model::ModelClient;
use crate::upstream::{CatalogApi, HotelsApi};

pub(crate) struct ServerState<P: ModelClient> {
    agent: ChatAgent<P>,
    catalog: CatalogApi,
    hotels: HotelsApi,
}

impl<P: ModelClient> ServerState<P> {
    pub(crate) fn new(agent: ChatAgent<P>, catalog: CatalogApi, hotels: HotelsApi) -> Self {
        Self {
            agent,
            catalog,
            hotels,
        }
    }

    pub(crate) fn agent(&self) -> &ChatAgent<P> {
        &self.agent
    }

    pub(crate) fn catalog(&self) -> &CatalogApi {
        &self.catalog
    }

    pub(crate) fn hotels(&self) -> &HotelsApi {
        &self.hotels
    }
}
