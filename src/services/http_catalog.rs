use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use crate::domain::{Product, ProductId, Stock};
use crate::error::ServiceError;
use super::{ProductService, StockService};

/// Stock and product lookups against the storefront HTTP API
/// (`GET /stock/{id}` and `GET /products/{id}`).
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: &str, product_id: ProductId) -> Result<T, ServiceError> {
        let url = format!("{}/{}/{}", self.base_url, resource, product_id);
        debug!(%url, "Sending request");

        let response = self.client.get(&url).send().await
            .map_err(|e| ServiceError::Request(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ServiceError::NotFound(product_id));
        }

        let response = response.error_for_status()
            .map_err(|e| ServiceError::Request(e.to_string()))?;

        response.json::<T>().await
            .map_err(|e| ServiceError::UnexpectedResponse(e.to_string()))
    }
}

#[async_trait]
impl StockService for HttpCatalog {
    #[instrument(skip(self))]
    async fn stock(&self, product_id: ProductId) -> Result<Stock, ServiceError> {
        self.fetch("stock", product_id).await
    }
}

#[async_trait]
impl ProductService for HttpCatalog {
    #[instrument(skip(self))]
    async fn product(&self, product_id: ProductId) -> Result<Product, ServiceError> {
        self.fetch("products", product_id).await
    }
}
