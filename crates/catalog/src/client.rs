//! HTTP client for the external name-lookup service.

use async_trait::async_trait;
use serde::Deserialize;

use retail_core::{ApiError, ApiResult, ProductId};

/// Source of product display names.
///
/// Both the production HTTP client and test doubles satisfy this contract; the
/// API layer only ever sees the trait object.
#[async_trait]
pub trait ProductNameSource: Send + Sync {
    /// Look up the display title for `id`.
    ///
    /// An unknown id is `ApiError::NotFound`; everything else that can go
    /// wrong on the wire is `Transport` or `Decode`.
    async fn product_name(&self, id: ProductId) -> ApiResult<String>;
}

/// Production name source backed by the catalog HTTP endpoint.
///
/// Stateless across calls; one `reqwest::Client` is shared for the process
/// lifetime. No retries and no timeout beyond the transport default.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    // The base URL carries the query-string prefix up to the key parameter;
    // the pre-shared key and the id are appended to it.
    fn lookup_url(&self, id: ProductId) -> String {
        format!("{}{}&tcin={}", self.base_url, self.api_key, id)
    }
}

#[async_trait]
impl ProductNameSource for CatalogClient {
    async fn product_name(&self, id: ProductId) -> ApiResult<String> {
        let resp = self
            .http
            .get(self.lookup_url(id))
            .send()
            .await
            .map_err(|e| {
                tracing::info!(product_id = %id, error = %e, "catalog request failed");
                ApiError::transport(e.to_string())
            })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::info!(product_id = %id, "product unknown to catalog");
            return Err(ApiError::not_found(format!("no product found with id {id}")));
        }

        if !resp.status().is_success() {
            return Err(ApiError::transport(format!(
                "catalog returned {}",
                resp.status()
            )));
        }

        let body: ProductDetailsResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        Ok(body.data.product.item.product_description.title)
    }
}

// Wire shape of the catalog response; only the title is of interest but the
// nesting has to be walked to reach it.

#[derive(Debug, Deserialize)]
struct ProductDetailsResponse {
    data: Data,
}

#[derive(Debug, Deserialize)]
struct Data {
    product: Product,
}

#[derive(Debug, Deserialize)]
struct Product {
    item: Item,
}

#[derive(Debug, Deserialize)]
struct Item {
    product_description: ProductDescription,
}

#[derive(Debug, Deserialize)]
struct ProductDescription {
    title: String,
}
