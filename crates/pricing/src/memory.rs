//! In-memory price store used as the test double for the production store.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use retail_core::{ApiError, ApiResult, ProductId};

use crate::record::PriceRecord;
use crate::store::{no_record_message, PriceStore};

/// `PriceStore` over a `HashMap`, same not-found and update semantics as the
/// production store.
#[derive(Debug, Default)]
pub struct InMemoryPriceStore {
    records: RwLock<HashMap<i64, PriceRecord>>,
}

impl InMemoryPriceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = PriceRecord>) -> Self {
        Self {
            records: RwLock::new(
                records
                    .into_iter()
                    .map(|r| (r.product_id.value(), r))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl PriceStore for InMemoryPriceStore {
    async fn get(&self, product_id: ProductId) -> ApiResult<PriceRecord> {
        self.records
            .read()
            .expect("price store lock poisoned")
            .get(&product_id.value())
            .cloned()
            .ok_or_else(|| ApiError::not_found(no_record_message(product_id)))
    }

    async fn update(&self, product_id: ProductId, new_price: f64) -> ApiResult<PriceRecord> {
        {
            let mut records = self.records.write().expect("price store lock poisoned");
            if let Some(record) = records.get_mut(&product_id.value()) {
                record.price = new_price;
            }
        }
        self.get(product_id).await
    }
}
