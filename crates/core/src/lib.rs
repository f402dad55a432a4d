//! `retail-core` — shared domain primitives.
//!
//! This crate contains the pieces every other crate agrees on (identifiers and
//! the error taxonomy). No IO lives here.

pub mod error;
pub mod id;

pub use error::{ApiError, ApiResult};
pub use id::ProductId;
