//! # Checkout Client
//!
//! Places orders. This is the only irreversible remote action the agent
//! performs, which is why the orchestrator screens the card first.

use super::connection::RemoteEndpoint;
use super::error::{RemoteCallError, RemoteFailure, Service};
use crate::model::{Address, OrderRequest, PaymentInfo, PlacedOrder};
use crate::proto::hipstershop::{self as pb, checkout_service_client::CheckoutServiceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[async_trait]
pub trait CheckoutService: Send + Sync {
    async fn place_order(
        &self,
        user_id: &str,
        currency: &str,
        order: &OrderRequest,
    ) -> Result<PlacedOrder, RemoteCallError>;
}

/// gRPC implementation of [`CheckoutService`].
#[derive(Clone)]
pub struct GrpcCheckoutClient {
    endpoint: RemoteEndpoint,
}

impl GrpcCheckoutClient {
    pub fn new(endpoint: RemoteEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl CheckoutService for GrpcCheckoutClient {
    #[instrument(skip(self, order), fields(email = %order.email))]
    async fn place_order(
        &self,
        user_id: &str,
        currency: &str,
        order: &OrderRequest,
    ) -> Result<PlacedOrder, RemoteCallError> {
        debug!(card = %order.payment.masked_card_number(), "Sending request");
        let request = pb::PlaceOrderRequest {
            user_id: user_id.to_string(),
            user_currency: currency.to_string(),
            address: Some(pb::Address::from(&order.address)),
            email: order.email.clone(),
            credit_card: Some(pb::CreditCardInfo::from(&order.payment)),
        };
        let response = self
            .endpoint
            .call("PlaceOrder", |channel| async move {
                CheckoutServiceClient::new(channel).place_order(request).await
            })
            .await?;

        let result = response.order.ok_or_else(|| {
            RemoteCallError::new(
                Service::Checkout,
                "PlaceOrder",
                RemoteFailure::Malformed("response carries no order".to_string()),
            )
        })?;
        Ok(PlacedOrder {
            order_id: result.order_id,
            tracking_id: result.shipping_tracking_id,
        })
    }
}

impl From<&Address> for pb::Address {
    fn from(address: &Address) -> Self {
        pb::Address {
            street_address: address.street_address.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            country: address.country.clone(),
            zip_code: address.zip_code,
        }
    }
}

impl From<&PaymentInfo> for pb::CreditCardInfo {
    fn from(payment: &PaymentInfo) -> Self {
        pb::CreditCardInfo {
            credit_card_number: payment.card_number.clone(),
            credit_card_cvv: payment.cvv,
            credit_card_expiration_year: payment.expiration_year,
            credit_card_expiration_month: payment.expiration_month,
        }
    }
}
