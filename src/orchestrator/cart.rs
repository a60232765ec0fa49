//! Cart operations for the session's user.

use super::error::OrchestratorError;
use super::recommend::AddItemHook;
use crate::clients::{CartService, CatalogService};
use crate::model::{CartItem, CartLine, CartView};
use crate::resolver::ProductResolver;
use crate::session::SessionClient;
use std::sync::Arc;
use tracing::{info, instrument};

/// Largest quantity the cart service can store.
pub const MAX_QUANTITY: u32 = i32::MAX as u32;

#[derive(Clone)]
pub struct CartOrchestrator {
    sessions: SessionClient,
    resolver: ProductResolver,
    catalog: Arc<dyn CatalogService>,
    cart: Arc<dyn CartService>,
    hooks: Vec<Arc<dyn AddItemHook>>,
}

impl CartOrchestrator {
    pub fn new(
        sessions: SessionClient,
        catalog: Arc<dyn CatalogService>,
        cart: Arc<dyn CartService>,
    ) -> Self {
        Self {
            sessions,
            resolver: ProductResolver::new(catalog.clone()),
            catalog,
            cart,
            hooks: Vec::new(),
        }
    }

    /// Adds a hook run after every successful add, in installation order.
    pub fn with_hook(mut self, hook: Arc<dyn AddItemHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Resolves `product_name` and adds `quantity` of it to the user's cart.
    /// Returns the report shown to the caller.
    #[instrument(skip(self))]
    pub async fn add_item(
        &self,
        session_id: &str,
        product_name: &str,
        quantity: u32,
    ) -> Result<String, OrchestratorError> {
        let user_id = self.sessions.require_user(session_id).await?;
        if quantity == 0 {
            return Err(OrchestratorError::invalid_arguments(
                "add_item_to_cart",
                "quantity must be at least 1",
            ));
        }
        if quantity > MAX_QUANTITY {
            return Err(OrchestratorError::invalid_arguments(
                "add_item_to_cart",
                format!("quantity must be at most {MAX_QUANTITY}"),
            ));
        }

        let product = self
            .resolver
            .resolve(product_name)
            .await?
            .into_product(product_name)?;
        self.cart
            .add_item(&user_id, CartItem::new(product.id.clone(), quantity))
            .await?;
        info!(product_id = %product.id, quantity, "Item added to cart");

        let mut report = format!("Successfully added {quantity} of {product_name} to your cart.");
        for hook in &self.hooks {
            if let Some(extra) = hook.after_add(product_name, &product) {
                report.push(' ');
                report.push_str(&extra);
            }
        }
        Ok(report)
    }

    /// The user's cart with product names, in the cart service's order.
    #[instrument(skip(self))]
    pub async fn get_cart(&self, session_id: &str) -> Result<CartView, OrchestratorError> {
        let user_id = self.sessions.require_user(session_id).await?;
        let items = self.cart.get_cart(&user_id).await?;

        let mut lines = Vec::with_capacity(items.len());
        for item in items {
            let product = self.catalog.get_product(&item.product_id).await?;
            lines.push(CartLine {
                quantity: item.quantity,
                product_name: product.name,
            });
        }
        Ok(CartView { lines })
    }

    #[instrument(skip(self))]
    pub async fn empty_cart(&self, session_id: &str) -> Result<(), OrchestratorError> {
        let user_id = self.sessions.require_user(session_id).await?;
        self.cart.empty_cart(&user_id).await?;
        info!("Cart emptied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{RemoteCallError, RemoteFailure, Service};
    use crate::mock::{MockCart, MockCatalog};
    use crate::model::{Money, Product};
    use crate::orchestrator::SunglassesRecommendation;
    use crate::resolver::ResolutionError;
    use crate::session::{self, SessionError};

    fn mug() -> Product {
        Product::new("6E92ZMYYFZ", "Mug", Money::new("USD", 8, 990_000_000))
    }

    fn sunglasses() -> Product {
        Product::new("9SIQT8TOJO", "Sunglasses", Money::new("USD", 19, 990_000_000))
    }

    fn orchestrator(catalog: &MockCatalog, cart: &MockCart) -> CartOrchestrator {
        let (actor, sessions) = session::new();
        tokio::spawn(actor.run());
        CartOrchestrator::new(sessions, catalog.service(), cart.service())
            .with_hook(Arc::new(SunglassesRecommendation))
    }

    async fn with_user(orchestrator: &CartOrchestrator) {
        orchestrator
            .sessions
            .set_user_id("s1", "alice")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_operations_require_user_and_make_no_calls() {
        let catalog = MockCatalog::new();
        let cart = MockCart::new();
        let orchestrator = orchestrator(&catalog, &cart);

        let expected = OrchestratorError::Session(SessionError::UserIdNotSet);
        assert_eq!(orchestrator.add_item("s1", "Mug", 1).await.unwrap_err(), expected);
        assert_eq!(orchestrator.get_cart("s1").await.unwrap_err(), expected);
        assert_eq!(orchestrator.empty_cart("s1").await.unwrap_err(), expected);

        assert_eq!(catalog.call_count(), 0);
        assert_eq!(cart.call_count(), 0);
    }

    #[tokio::test]
    async fn test_session_is_checked_before_quantity() {
        let catalog = MockCatalog::new();
        let cart = MockCart::new();
        let orchestrator = orchestrator(&catalog, &cart);

        assert_eq!(
            orchestrator.add_item("s1", "Mug", 0).await.unwrap_err(),
            OrchestratorError::Session(SessionError::UserIdNotSet)
        );

        with_user(&orchestrator).await;
        assert!(matches!(
            orchestrator.add_item("s1", "Mug", 0).await.unwrap_err(),
            OrchestratorError::InvalidArguments { .. }
        ));
        assert_eq!(catalog.call_count(), 0);
    }

    #[tokio::test]
    async fn test_oversized_quantity_is_rejected_before_any_call() {
        let catalog = MockCatalog::new();
        let cart = MockCart::new();
        let orchestrator = orchestrator(&catalog, &cart);
        with_user(&orchestrator).await;

        assert!(matches!(
            orchestrator.add_item("s1", "Mug", 3_000_000_000).await.unwrap_err(),
            OrchestratorError::InvalidArguments { .. }
        ));
        assert!(matches!(
            orchestrator.add_item("s1", "Mug", MAX_QUANTITY + 1).await.unwrap_err(),
            OrchestratorError::InvalidArguments { .. }
        ));
        assert_eq!(catalog.call_count(), 0);
        assert_eq!(cart.call_count(), 0);
    }

    #[tokio::test]
    async fn test_add_item_sunglasses_recommends_accessories() {
        let mut catalog = MockCatalog::new();
        let mut cart = MockCart::new();
        catalog.expect_search("Sunglasses").return_ok(vec![sunglasses()]);
        cart.expect_add_item("alice", CartItem::new("9SIQT8TOJO", 1))
            .return_ok(());
        let orchestrator = orchestrator(&catalog, &cart);
        with_user(&orchestrator).await;

        let report = orchestrator.add_item("s1", "Sunglasses", 1).await.unwrap();
        assert!(report.starts_with("Successfully added 1 of Sunglasses to your cart."));
        assert!(report.contains("Tank Top"));
        assert!(report.contains("Watch"));

        catalog.verify();
        cart.verify();
    }

    #[tokio::test]
    async fn test_add_item_plain_product_has_no_recommendation() {
        let mut catalog = MockCatalog::new();
        let mut cart = MockCart::new();
        catalog.expect_search("Mug").return_ok(vec![mug()]);
        cart.expect_add_item("alice", CartItem::new("6E92ZMYYFZ", 2))
            .return_ok(());
        let orchestrator = orchestrator(&catalog, &cart);
        with_user(&orchestrator).await;

        assert_eq!(
            orchestrator.add_item("s1", "Mug", 2).await.unwrap(),
            "Successfully added 2 of Mug to your cart."
        );
        cart.verify();
    }

    #[tokio::test]
    async fn test_unresolved_product_is_not_added() {
        let mut catalog = MockCatalog::new();
        let cart = MockCart::new();
        catalog.expect_search("Hat").return_ok(vec![]);
        catalog
            .expect_search("Mug")
            .return_ok(vec![mug(), Product::new("X", "Mug Set", Money::default())]);
        let orchestrator = orchestrator(&catalog, &cart);
        with_user(&orchestrator).await;

        assert_eq!(
            orchestrator.add_item("s1", "Hat", 1).await.unwrap_err(),
            OrchestratorError::Resolution(ResolutionError::NotFound { query: "Hat".into() })
        );
        assert_eq!(
            orchestrator.add_item("s1", "Mug", 1).await.unwrap_err(),
            OrchestratorError::Resolution(ResolutionError::Ambiguous {
                query: "Mug".into(),
                candidates: vec!["Mug".into(), "Mug Set".into()],
            })
        );
        assert_eq!(cart.call_count(), 0);
        catalog.verify();
    }

    #[tokio::test]
    async fn test_get_cart_joins_names_in_cart_order() {
        let mut catalog = MockCatalog::new();
        let mut cart = MockCart::new();
        cart.expect_get_cart("alice").return_ok(vec![
            CartItem::new("6E92ZMYYFZ", 2),
            CartItem::new("9SIQT8TOJO", 1),
        ]);
        catalog.expect_get("6E92ZMYYFZ").return_ok(mug());
        catalog.expect_get("9SIQT8TOJO").return_ok(sunglasses());
        let orchestrator = orchestrator(&catalog, &cart);
        with_user(&orchestrator).await;

        let view = orchestrator.get_cart("s1").await.unwrap();
        assert_eq!(view.to_string(), "2 x Mug, 1 x Sunglasses");
        catalog.verify();
        cart.verify();
    }

    #[tokio::test]
    async fn test_get_cart_empty_skips_catalog() {
        let catalog = MockCatalog::new();
        let mut cart = MockCart::new();
        cart.expect_get_cart("alice").return_ok(vec![]);
        let orchestrator = orchestrator(&catalog, &cart);
        with_user(&orchestrator).await;

        assert!(orchestrator.get_cart("s1").await.unwrap().is_empty());
        assert_eq!(catalog.call_count(), 0);
    }

    #[tokio::test]
    async fn test_get_cart_unknown_product_fails() {
        let mut catalog = MockCatalog::new();
        let mut cart = MockCart::new();
        cart.expect_get_cart("alice")
            .return_ok(vec![CartItem::new("GONE", 1)]);
        let error = RemoteCallError::new(
            Service::Catalog,
            "GetProduct",
            RemoteFailure::Rejected {
                code: "NotFound".into(),
                message: "no product with ID GONE".into(),
            },
        );
        catalog.expect_get("GONE").return_err(error.clone());
        let orchestrator = orchestrator(&catalog, &cart);
        with_user(&orchestrator).await;

        assert_eq!(
            orchestrator.get_cart("s1").await.unwrap_err(),
            OrchestratorError::Remote(error)
        );
    }

    #[tokio::test]
    async fn test_empty_cart_twice() {
        let catalog = MockCatalog::new();
        let mut cart = MockCart::new();
        cart.expect_empty_cart("alice").return_ok(());
        cart.expect_empty_cart("alice").return_ok(());
        let orchestrator = orchestrator(&catalog, &cart);
        with_user(&orchestrator).await;

        orchestrator.empty_cart("s1").await.unwrap();
        orchestrator.empty_cart("s1").await.unwrap();
        cart.verify();
    }
}
