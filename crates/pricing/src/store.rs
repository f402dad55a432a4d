//! Repository contract over the pricing collection.

use async_trait::async_trait;

use retail_core::{ApiResult, ProductId};

use crate::record::PriceRecord;

/// Keyed access to price records, one per product id.
///
/// "No matching record" is the expected `ApiError::NotFound` outcome on both
/// operations, distinct from store failures (`ApiError::Store`).
#[async_trait]
pub trait PriceStore: Send + Sync {
    /// Fetch the record whose `product_id` matches.
    async fn get(&self, product_id: ProductId) -> ApiResult<PriceRecord>;

    /// Set `price` on the matching record, then re-read and return it.
    ///
    /// Currency code and identity fields are never touched. When no record
    /// matches, the write is a no-op and the re-read reports `NotFound`. The
    /// two steps are not transactional: under concurrent writers the returned
    /// record reflects the state at re-read time, not necessarily the value
    /// just written.
    async fn update(&self, product_id: ProductId, new_price: f64) -> ApiResult<PriceRecord>;
}

/// Uniform message for a product id with no price record.
pub(crate) fn no_record_message(product_id: ProductId) -> String {
    format!("no price found for product {product_id}")
}
