//! # Catalog Client
//!
//! Read-only access to the product catalog service.

use super::connection::RemoteEndpoint;
use super::error::RemoteCallError;
use crate::model::{Money, Product};
use crate::proto::hipstershop::{
    self as pb, product_catalog_service_client::ProductCatalogServiceClient,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// The catalog operations the orchestrators rely on.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, RemoteCallError>;

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, RemoteCallError>;

    async fn get_product(&self, id: &str) -> Result<Product, RemoteCallError>;
}

/// gRPC implementation of [`CatalogService`].
#[derive(Clone)]
pub struct GrpcCatalogClient {
    endpoint: RemoteEndpoint,
}

impl GrpcCatalogClient {
    pub fn new(endpoint: RemoteEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl CatalogService for GrpcCatalogClient {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, RemoteCallError> {
        debug!("Sending request");
        let response = self
            .endpoint
            .call("ListProducts", |channel| async move {
                ProductCatalogServiceClient::new(channel)
                    .list_products(pb::Empty {})
                    .await
            })
            .await?;
        Ok(response.products.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn search_products(&self, query: &str) -> Result<Vec<Product>, RemoteCallError> {
        debug!("Sending request");
        let request = pb::SearchProductsRequest {
            query: query.to_string(),
        };
        let response = self
            .endpoint
            .call("SearchProducts", |channel| async move {
                ProductCatalogServiceClient::new(channel)
                    .search_products(request)
                    .await
            })
            .await?;
        Ok(response.results.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: &str) -> Result<Product, RemoteCallError> {
        debug!("Sending request");
        let request = pb::GetProductRequest { id: id.to_string() };
        let product = self
            .endpoint
            .call("GetProduct", |channel| async move {
                ProductCatalogServiceClient::new(channel)
                    .get_product(request)
                    .await
            })
            .await?;
        Ok(Product::from(product))
    }
}

impl From<pb::Money> for Money {
    fn from(money: pb::Money) -> Self {
        Money::new(money.currency_code, money.units, money.nanos)
    }
}

impl From<pb::Product> for Product {
    fn from(product: pb::Product) -> Self {
        Product::new(
            product.id,
            product.name,
            product.price_usd.map(Money::from).unwrap_or_default(),
        )
    }
}
