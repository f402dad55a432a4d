//! Outbound naming: lookup of a product's display title from the external
//! catalog service.

pub mod client;

pub use client::{CatalogClient, ProductNameSource};
