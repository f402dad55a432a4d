//! Strongly-typed product identifier.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Identifier of a sellable item.
///
/// This is the join key between the naming service and the price store. The
/// wire format is a plain integer; path segments parse through [`FromStr`] so
/// a non-numeric id is rejected up front instead of being coerced to zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for ProductId {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ApiError::invalid_id(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        let id: ProductId = "13860428".parse().unwrap();
        assert_eq!(id.value(), 13860428);
        assert_eq!(id.to_string(), "13860428");
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = "lebowski".parse::<ProductId>().unwrap_err();
        assert_eq!(err, ApiError::invalid_id("lebowski"));
    }

    #[test]
    fn serializes_as_a_bare_integer() {
        let json = serde_json::to_string(&ProductId::new(42)).unwrap();
        assert_eq!(json, "42");
        let back: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(back, ProductId::new(42));
    }
}
