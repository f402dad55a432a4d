//! Request/response DTOs and JSON mapping helpers.

use serde::{Deserialize, Serialize};

use retail_core::ProductId;
use retail_pricing::PriceRecord;

/// The merged view returned to API callers, and the accepted PUT body.
///
/// Built fresh per request from the two sources; never persisted as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: ProductId,
    /// Ignored on input (the canonical name always comes from the catalog).
    #[serde(default)]
    pub name: String,
    pub current_price: Price,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub value: f64,
    pub currency_code: String,
}

/// Merge the catalog name and the stored price into the response entity.
pub fn merged(id: ProductId, name: String, record: &PriceRecord) -> ProductResponse {
    ProductResponse {
        id,
        name,
        current_price: Price {
            value: record.price,
            currency_code: record.currency_code.clone(),
        },
    }
}
