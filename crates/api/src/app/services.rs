//! Dependency wiring: the two shared handles every request uses.

use std::sync::Arc;

use retail_catalog::{CatalogClient, ProductNameSource};
use retail_pricing::{MongoPriceStore, PriceStore};

use crate::config::Config;

/// Process-wide service handles, constructed once at startup and injected
/// into handlers as trait objects so tests can substitute doubles.
pub struct AppServices {
    pub names: Arc<dyn ProductNameSource>,
    pub prices: Arc<dyn PriceStore>,
}

impl AppServices {
    pub fn new(names: Arc<dyn ProductNameSource>, prices: Arc<dyn PriceStore>) -> Self {
        Self { names, prices }
    }
}

/// Production wiring: MongoDB price store + catalog HTTP client.
pub async fn build_services(config: &Config) -> anyhow::Result<AppServices> {
    let prices = MongoPriceStore::connect(
        &config.store.connection_string(),
        &config.store.database,
        &config.store.collection,
    )
    .await?;

    let names = CatalogClient::new(&config.catalog_base_url, &config.catalog_api_key);

    Ok(AppServices::new(Arc::new(names), Arc::new(prices)))
}
