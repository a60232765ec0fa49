//! # Mock Services
//!
//! Stand-ins for the remote services and the tool channel, for testing the
//! orchestrators without a network.
//!
//! Each mock records an ordered queue of expected calls. A call that does not
//! match the next expectation panics, as does [`verify`](MockCart::verify)
//! when expectations are left over. Every mock also counts the calls it
//! received, so tests can assert that a path made no remote call at all.
//!
//! # Example
//! ```ignore
//! let mut catalog = MockCatalog::new();
//! catalog.expect_search("Mug").return_ok(vec![mug.clone()]);
//!
//! let resolver = ProductResolver::new(catalog.service());
//! // ... exercise the code under test ...
//! catalog.verify();
//! ```

use crate::bridge::{ExternalToolError, ToolChannel};
use crate::clients::{CartService, CatalogService, CheckoutService, RemoteCallError};
use crate::model::{CartItem, OrderRequest, PlacedOrder, Product};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION QUEUE
// =============================================================================

struct Expectations<X> {
    queue: Arc<Mutex<VecDeque<X>>>,
    calls: Arc<AtomicUsize>,
}

impl<X> Clone for Expectations<X> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue.clone(),
            calls: self.calls.clone(),
        }
    }
}

impl<X> Expectations<X> {
    fn new() -> Self {
        Self {
            queue: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn next(&self, call: &str) -> X {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.queue.lock().unwrap().pop_front();
        match next {
            Some(expectation) => expectation,
            None => panic!("Unexpected request: {call}"),
        }
    }

    fn builder<T, E>(
        &self,
        make: impl FnOnce(Result<T, E>) -> X + Send + 'static,
    ) -> ExpectationBuilder<T, E, X> {
        ExpectationBuilder {
            queue: self.queue.clone(),
            make: Box::new(make),
        }
    }

    fn verify(&self, mock: &str) {
        let remaining = self.queue.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all {mock} expectations were met. {remaining} remaining");
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Sets the response for one expected call.
pub struct ExpectationBuilder<T, E, X> {
    queue: Arc<Mutex<VecDeque<X>>>,
    make: Box<dyn FnOnce(Result<T, E>) -> X + Send>,
}

impl<T, E, X> ExpectationBuilder<T, E, X> {
    /// The call succeeds with `value`.
    pub fn return_ok(self, value: T) {
        let expectation = (self.make)(Ok(value));
        self.queue.lock().unwrap().push_back(expectation);
    }

    /// The call fails with `error`.
    pub fn return_err(self, error: E) {
        let expectation = (self.make)(Err(error));
        self.queue.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// CATALOG
// =============================================================================

#[doc(hidden)]
pub enum CatalogExpectation {
    List {
        response: Result<Vec<Product>, RemoteCallError>,
    },
    Search {
        query: String,
        response: Result<Vec<Product>, RemoteCallError>,
    },
    Get {
        id: String,
        response: Result<Product, RemoteCallError>,
    },
}

/// Mock catalog service.
#[derive(Clone)]
pub struct MockCatalog {
    expectations: Expectations<CatalogExpectation>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            expectations: Expectations::new(),
        }
    }

    /// Returns a service handle backed by this mock.
    pub fn service(&self) -> Arc<dyn CatalogService> {
        Arc::new(self.clone())
    }

    pub fn expect_list(
        &mut self,
    ) -> ExpectationBuilder<Vec<Product>, RemoteCallError, CatalogExpectation> {
        self.expectations
            .builder(|response| CatalogExpectation::List { response })
    }

    pub fn expect_search(
        &mut self,
        query: impl Into<String>,
    ) -> ExpectationBuilder<Vec<Product>, RemoteCallError, CatalogExpectation> {
        let query = query.into();
        self.expectations
            .builder(move |response| CatalogExpectation::Search { query, response })
    }

    pub fn expect_get(
        &mut self,
        id: impl Into<String>,
    ) -> ExpectationBuilder<Product, RemoteCallError, CatalogExpectation> {
        let id = id.into();
        self.expectations
            .builder(move |response| CatalogExpectation::Get { id, response })
    }

    pub fn call_count(&self) -> usize {
        self.expectations.call_count()
    }

    pub fn verify(&self) {
        self.expectations.verify("catalog");
    }
}

#[async_trait]
impl CatalogService for MockCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, RemoteCallError> {
        match self.expectations.next("list_products") {
            CatalogExpectation::List { response } => response,
            _ => panic!("Unexpected request or expectation mismatch: list_products"),
        }
    }

    async fn search_products(&self, query: &str) -> Result<Vec<Product>, RemoteCallError> {
        match self.expectations.next("search_products") {
            CatalogExpectation::Search {
                query: expected,
                response,
            } => {
                assert_eq!(query, expected, "search_products query");
                response
            }
            _ => panic!("Unexpected request or expectation mismatch: search_products({query})"),
        }
    }

    async fn get_product(&self, id: &str) -> Result<Product, RemoteCallError> {
        match self.expectations.next("get_product") {
            CatalogExpectation::Get {
                id: expected,
                response,
            } => {
                assert_eq!(id, expected, "get_product id");
                response
            }
            _ => panic!("Unexpected request or expectation mismatch: get_product({id})"),
        }
    }
}

// =============================================================================
// CART
// =============================================================================

#[doc(hidden)]
pub enum CartExpectation {
    AddItem {
        user_id: String,
        item: CartItem,
        response: Result<(), RemoteCallError>,
    },
    GetCart {
        user_id: String,
        response: Result<Vec<CartItem>, RemoteCallError>,
    },
    EmptyCart {
        user_id: String,
        response: Result<(), RemoteCallError>,
    },
}

/// Mock cart service.
#[derive(Clone)]
pub struct MockCart {
    expectations: Expectations<CartExpectation>,
}

impl Default for MockCart {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCart {
    pub fn new() -> Self {
        Self {
            expectations: Expectations::new(),
        }
    }

    pub fn service(&self) -> Arc<dyn CartService> {
        Arc::new(self.clone())
    }

    pub fn expect_add_item(
        &mut self,
        user_id: impl Into<String>,
        item: CartItem,
    ) -> ExpectationBuilder<(), RemoteCallError, CartExpectation> {
        let user_id = user_id.into();
        self.expectations.builder(move |response| CartExpectation::AddItem {
            user_id,
            item,
            response,
        })
    }

    pub fn expect_get_cart(
        &mut self,
        user_id: impl Into<String>,
    ) -> ExpectationBuilder<Vec<CartItem>, RemoteCallError, CartExpectation> {
        let user_id = user_id.into();
        self.expectations
            .builder(move |response| CartExpectation::GetCart { user_id, response })
    }

    pub fn expect_empty_cart(
        &mut self,
        user_id: impl Into<String>,
    ) -> ExpectationBuilder<(), RemoteCallError, CartExpectation> {
        let user_id = user_id.into();
        self.expectations
            .builder(move |response| CartExpectation::EmptyCart { user_id, response })
    }

    pub fn call_count(&self) -> usize {
        self.expectations.call_count()
    }

    pub fn verify(&self) {
        self.expectations.verify("cart");
    }
}

#[async_trait]
impl CartService for MockCart {
    async fn add_item(&self, user_id: &str, item: CartItem) -> Result<(), RemoteCallError> {
        match self.expectations.next("add_item") {
            CartExpectation::AddItem {
                user_id: expected_user,
                item: expected_item,
                response,
            } => {
                assert_eq!(user_id, expected_user, "add_item user");
                assert_eq!(item, expected_item, "add_item item");
                response
            }
            _ => panic!("Unexpected request or expectation mismatch: add_item({user_id})"),
        }
    }

    async fn get_cart(&self, user_id: &str) -> Result<Vec<CartItem>, RemoteCallError> {
        match self.expectations.next("get_cart") {
            CartExpectation::GetCart {
                user_id: expected,
                response,
            } => {
                assert_eq!(user_id, expected, "get_cart user");
                response
            }
            _ => panic!("Unexpected request or expectation mismatch: get_cart({user_id})"),
        }
    }

    async fn empty_cart(&self, user_id: &str) -> Result<(), RemoteCallError> {
        match self.expectations.next("empty_cart") {
            CartExpectation::EmptyCart {
                user_id: expected,
                response,
            } => {
                assert_eq!(user_id, expected, "empty_cart user");
                response
            }
            _ => panic!("Unexpected request or expectation mismatch: empty_cart({user_id})"),
        }
    }
}

// =============================================================================
// CHECKOUT
// =============================================================================

#[doc(hidden)]
pub struct CheckoutExpectation {
    user_id: String,
    currency: String,
    response: Result<PlacedOrder, RemoteCallError>,
}

/// Mock checkout service. Also keeps every order it was asked to place.
#[derive(Clone)]
pub struct MockCheckout {
    expectations: Expectations<CheckoutExpectation>,
    received: Arc<Mutex<Vec<OrderRequest>>>,
}

impl Default for MockCheckout {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCheckout {
    pub fn new() -> Self {
        Self {
            expectations: Expectations::new(),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn service(&self) -> Arc<dyn CheckoutService> {
        Arc::new(self.clone())
    }

    pub fn expect_place_order(
        &mut self,
        user_id: impl Into<String>,
        currency: impl Into<String>,
    ) -> ExpectationBuilder<PlacedOrder, RemoteCallError, CheckoutExpectation> {
        let user_id = user_id.into();
        let currency = currency.into();
        self.expectations.builder(move |response| CheckoutExpectation {
            user_id,
            currency,
            response,
        })
    }

    /// Orders passed to `place_order`, oldest first.
    pub fn received_orders(&self) -> Vec<OrderRequest> {
        self.received.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.expectations.call_count()
    }

    pub fn verify(&self) {
        self.expectations.verify("checkout");
    }
}

#[async_trait]
impl CheckoutService for MockCheckout {
    async fn place_order(
        &self,
        user_id: &str,
        currency: &str,
        order: &OrderRequest,
    ) -> Result<PlacedOrder, RemoteCallError> {
        self.received.lock().unwrap().push(order.clone());
        let expectation = self.expectations.next("place_order");
        assert_eq!(user_id, expectation.user_id, "place_order user");
        assert_eq!(currency, expectation.currency, "place_order currency");
        expectation.response
    }
}

// =============================================================================
// TOOL CHANNEL
// =============================================================================

#[doc(hidden)]
pub struct ToolExpectation {
    name: String,
    arguments: Value,
    response: Result<String, ExternalToolError>,
}

/// Mock tool channel.
#[derive(Clone)]
pub struct MockToolChannel {
    expectations: Expectations<ToolExpectation>,
}

impl Default for MockToolChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl MockToolChannel {
    pub fn new() -> Self {
        Self {
            expectations: Expectations::new(),
        }
    }

    pub fn channel(&self) -> Arc<dyn ToolChannel> {
        Arc::new(self.clone())
    }

    pub fn expect_call(
        &mut self,
        name: impl Into<String>,
        arguments: Value,
    ) -> ExpectationBuilder<String, ExternalToolError, ToolExpectation> {
        let name = name.into();
        self.expectations.builder(move |response| ToolExpectation {
            name,
            arguments,
            response,
        })
    }

    pub fn call_count(&self) -> usize {
        self.expectations.call_count()
    }

    pub fn verify(&self) {
        self.expectations.verify("tool channel");
    }
}

#[async_trait]
impl ToolChannel for MockToolChannel {
    async fn call_tool(&self, name: &str, arguments: Value) -> Result<String, ExternalToolError> {
        let expectation = self.expectations.next(name);
        assert_eq!(name, expectation.name, "tool name");
        assert_eq!(arguments, expectation.arguments, "tool arguments");
        expectation.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{RemoteFailure, Service};
    use crate::model::Money;

    #[tokio::test]
    async fn test_catalog_list_answers_in_queue_order() {
        let mut catalog = MockCatalog::new();
        let mug = Product::new("6E92ZMYYFZ", "Mug", Money::new("USD", 8, 990_000_000));
        let error = RemoteCallError::new(
            Service::Catalog,
            "ListProducts",
            RemoteFailure::Connect("connection refused".into()),
        );
        catalog.expect_list().return_ok(vec![mug.clone()]);
        catalog.expect_list().return_err(error.clone());

        let service = catalog.service();
        assert_eq!(service.list_products().await.unwrap(), vec![mug]);
        assert_eq!(service.list_products().await.unwrap_err(), error);
        assert_eq!(catalog.call_count(), 2);
        catalog.verify();
    }

    #[test]
    #[should_panic(expected = "Not all catalog expectations were met. 1 remaining")]
    fn test_verify_panics_on_leftover_expectation() {
        let mut catalog = MockCatalog::new();
        catalog.expect_list().return_ok(vec![]);
        catalog.verify();
    }
}
