//! The store-resident price document.

use serde::{Deserialize, Serialize};

use retail_core::ProductId;

/// Price and currency for one product id.
///
/// Records are created out-of-band and never deleted through this service;
/// only `price` is mutable here. `id` is the store-assigned document id, kept
/// opaque (hex string) so nothing above the repository depends on the store's
/// id type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub product_id: ProductId,
    pub price: f64,
    pub currency_code: String,
}

impl PriceRecord {
    /// Record with no store-assigned id yet (seed data, tests).
    pub fn new(product_id: ProductId, price: f64, currency_code: impl Into<String>) -> Self {
        Self {
            id: None,
            product_id,
            price,
            currency_code: currency_code.into(),
        }
    }
}
