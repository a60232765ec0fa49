//! Free-text product names to catalog products.

use crate::clients::{CatalogService, RemoteCallError};
use crate::model::Product;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument};

/// What a catalog search made of a product name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(Product),
    /// More than one product matched; holds every candidate's name.
    Ambiguous(Vec<String>),
    NotFound,
}

impl Resolution {
    /// The resolved product, or why there isn't exactly one.
    pub fn into_product(self, query: &str) -> Result<Product, ResolutionError> {
        match self {
            Resolution::Resolved(product) => Ok(product),
            Resolution::Ambiguous(candidates) => Err(ResolutionError::Ambiguous {
                query: query.to_string(),
                candidates,
            }),
            Resolution::NotFound => Err(ResolutionError::NotFound {
                query: query.to_string(),
            }),
        }
    }
}

/// A product name that does not name exactly one product.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("Could not find a unique product: '{query}'.")]
    NotFound { query: String },

    #[error("Could not find a unique product: '{query}'. Candidates: {}.", .candidates.join(", "))]
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },
}

/// Resolves names with a single catalog search.
#[derive(Clone)]
pub struct ProductResolver {
    catalog: Arc<dyn CatalogService>,
}

impl ProductResolver {
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self { catalog }
    }

    #[instrument(skip(self))]
    pub async fn resolve(&self, query: &str) -> Result<Resolution, RemoteCallError> {
        let mut matches = self.catalog.search_products(query).await?;
        debug!(matches = matches.len(), "Search finished");

        let resolution = match matches.len() {
            0 => Resolution::NotFound,
            1 => Resolution::Resolved(matches.remove(0)),
            _ => Resolution::Ambiguous(matches.into_iter().map(|p| p.name).collect()),
        };
        Ok(resolution)
    }
}
