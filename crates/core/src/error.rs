//! Error taxonomy shared by the catalog client, the price store, and the API.

use thiserror::Error;

/// Result type used across the service.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure modes observable through the API.
///
/// Keep this small: every dependency failure is converted to one of these at
/// the point of call and mapped to an HTTP status exactly once, in the API
/// layer. The message is what callers see in the error body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The product (name or price record) does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A path identifier failed to parse.
    #[error("invalid product id: {0}")]
    InvalidId(String),

    /// The id in an update body disagrees with the id in the path.
    #[error("product id in body does not match id in path")]
    IdMismatch,

    /// The outbound name lookup failed at the transport or status level.
    #[error("name lookup failed: {0}")]
    Transport(String),

    /// A response or document could not be decoded.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The price store reported a failure.
    #[error("price store error: {0}")]
    Store(String),
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Whether this error is the expected "resource absent" outcome rather
    /// than a dependency failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
