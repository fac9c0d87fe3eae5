use async_trait::async_trait;
use tracing::{debug, instrument};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::catalog_actor::{CatalogAction, CatalogActionResult};
use crate::domain::{CatalogItem, NewCatalogItem, Product, ProductId, Stock};
use crate::error::ServiceError;
use crate::services::{ProductService, StockService};

/// Client for the in-process catalog actor.
///
/// Serves as both stock and product service for the cart.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<CatalogItem>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<CatalogItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn add_item(&self, item: NewCatalogItem) -> Result<ProductId, ServiceError> {
        debug!("Sending request");
        self.inner.create(item).await.map_err(|e| ServiceError::Request(e.to_string()))
    }

    #[allow(dead_code)]
    #[instrument(skip(self))]
    pub async fn set_stock(&self, product_id: ProductId, amount: u32) -> Result<Stock, ServiceError> {
        debug!("Sending request");
        self.stock_action(product_id, CatalogAction::SetStock(amount)).await
    }

    async fn stock_action(&self, product_id: ProductId, action: CatalogAction) -> Result<Stock, ServiceError> {
        match self.inner.perform_action(product_id, action).await {
            Ok(CatalogActionResult::StockLevel(stock)) => Ok(stock),
            Err(FrameworkError::NotFound(_)) => Err(ServiceError::NotFound(product_id)),
            Err(e) => Err(ServiceError::Request(e.to_string())),
        }
    }
}

#[async_trait]
impl StockService for CatalogClient {
    #[instrument(skip(self))]
    async fn stock(&self, product_id: ProductId) -> Result<Stock, ServiceError> {
        debug!("Sending request");
        self.stock_action(product_id, CatalogAction::CheckStock).await
    }
}

#[async_trait]
impl ProductService for CatalogClient {
    #[instrument(skip(self))]
    async fn product(&self, product_id: ProductId) -> Result<Product, ServiceError> {
        debug!("Sending request");
        match self.inner.get(product_id).await {
            Ok(Some(item)) => Ok(item.to_product()),
            Ok(None) => Err(ServiceError::NotFound(product_id)),
            Err(e) => Err(ServiceError::Request(e.to_string())),
        }
    }
}
