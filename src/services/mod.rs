//! Ports the cart actor talks to: stock and product lookups, durable storage
//! and user-facing notifications.

pub mod http_catalog;
pub mod notifier;

pub use http_catalog::*;
pub use notifier::*;

use std::sync::Arc;
use async_trait::async_trait;
use crate::domain::{Product, ProductId, Stock};
use crate::error::{ServiceError, StorageError};

/// Remote lookup of the quantity available for a product.
#[async_trait]
pub trait StockService: Send + Sync {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, ServiceError>;
}

/// Remote lookup of product metadata.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn product(&self, product_id: ProductId) -> Result<Product, ServiceError>;
}

/// Durable key-value storage surviving process restarts.
#[async_trait]
pub trait CartStorage: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn write(&self, key: &str, value: String) -> Result<(), StorageError>;
}

/// One-way user notifications. Implementations must not block.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Everything the cart actor depends on, injected once at startup.
#[derive(Clone)]
pub struct CartPorts {
    pub stock: Arc<dyn StockService>,
    pub products: Arc<dyn ProductService>,
    pub storage: Arc<dyn CartStorage>,
    pub notifier: Arc<dyn Notifier>,
}
