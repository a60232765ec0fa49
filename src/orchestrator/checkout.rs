//! Order placement and order tracking.

use super::error::OrchestratorError;
use crate::bridge::PACKAGE_STATUS_TOOL;
use crate::clients::CheckoutService;
use crate::envelope::Continuation;
use crate::fraud::{FraudScreen, FraudVerdict};
use crate::model::{OrderRequest, PlacedOrder};
use crate::session::SessionClient;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct CheckoutOrchestrator {
    sessions: SessionClient,
    fraud: FraudScreen,
    checkout: Arc<dyn CheckoutService>,
    currency: String,
}

impl CheckoutOrchestrator {
    pub fn new(
        sessions: SessionClient,
        fraud: FraudScreen,
        checkout: Arc<dyn CheckoutService>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            sessions,
            fraud,
            checkout,
            currency: currency.into(),
        }
    }

    /// Screens the card, places the order and remembers its tracking id.
    ///
    /// Runs under the session's checkout lock: two orders for the same
    /// session never interleave. A failed order leaves nothing recorded.
    #[instrument(skip(self, order), fields(card = %order.payment.masked_card_number()))]
    pub async fn place_order(
        &self,
        session_id: &str,
        order: OrderRequest,
    ) -> Result<PlacedOrder, OrchestratorError> {
        let user_id = self.sessions.require_user(session_id).await?;
        let lock = self.sessions.checkout_lock(session_id).await?;
        let _guard = lock.lock().await;

        if self.fraud.check(&order.payment.card_number).await? == FraudVerdict::Blocked {
            warn!("Order refused by fraud screen");
            return Err(OrchestratorError::FraudBlocked);
        }

        let placed = self
            .checkout
            .place_order(&user_id, &self.currency, &order)
            .await?;
        self.sessions.record_order(session_id, &placed).await?;
        info!(order_id = %placed.order_id, "Order placed");
        Ok(placed)
    }

    /// Points the caller at the shipment status tool for a known order.
    #[instrument(skip(self))]
    pub async fn track_order(
        &self,
        session_id: &str,
        order_id: &str,
    ) -> Result<Continuation, OrchestratorError> {
        match self.sessions.tracking_id(session_id, order_id).await? {
            Some(tracking_id) => Ok(Continuation::new(
                PACKAGE_STATUS_TOOL,
                json!({ "tracking_id": tracking_id }),
            )),
            None => Err(OrchestratorError::OrderNotFound(order_id.to_string())),
        }
    }
}
