use thiserror::Error;
use crate::domain::ProductId;

/// Failures of the remote stock and product lookups.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Catalog request failed: {0}")]
    Request(String),
    #[error("Unexpected catalog response: {0}")]
    UnexpectedResponse(String),
}

/// Failures of the durable cart storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cart serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[allow(dead_code)]
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
