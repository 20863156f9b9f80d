//! Business logic services

pub mod catalog;
pub mod resolver;
pub mod snapshot;

use crate::{config::CatalogConfig, error::AppResult, repository::CatalogStoreArc};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services on top of the given store.
    ///
    /// Completes only once the initial catalog snapshot has been taken.
    pub async fn new(store: CatalogStoreArc, catalog_config: &CatalogConfig) -> AppResult<Self> {
        Ok(Self {
            catalog: catalog::CatalogService::new(store, catalog_config).await?,
        })
    }
}
