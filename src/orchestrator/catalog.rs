//! Read-only catalog questions. These need no user.

use super::error::OrchestratorError;
use crate::clients::CatalogService;
use crate::model::Product;
use crate::resolver::{ProductResolver, Resolution};
use std::sync::Arc;
use tracing::instrument;

#[derive(Clone)]
pub struct CatalogQueries {
    catalog: Arc<dyn CatalogService>,
    resolver: ProductResolver,
}

impl CatalogQueries {
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self {
            resolver: ProductResolver::new(catalog.clone()),
            catalog,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, OrchestratorError> {
        Ok(self.catalog.list_products().await?)
    }

    #[instrument(skip(self))]
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, OrchestratorError> {
        Ok(self.catalog.search_products(query).await?)
    }

    /// Looks the product up by name; the caller decides how to phrase a
    /// missing or ambiguous match.
    #[instrument(skip(self))]
    pub async fn product_price(&self, product_name: &str) -> Result<Resolution, OrchestratorError> {
        Ok(self.resolver.resolve(product_name).await?)
    }
}
