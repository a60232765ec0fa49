//! # Cart Client
//!
//! Per-user cart mutations and reads against the cart service.

use super::connection::RemoteEndpoint;
use super::error::{RemoteCallError, RemoteFailure, Service};
use crate::model::CartItem;
use crate::proto::hipstershop::{self as pb, cart_service_client::CartServiceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// The cart operations the orchestrators rely on.
#[async_trait]
pub trait CartService: Send + Sync {
    async fn add_item(&self, user_id: &str, item: CartItem) -> Result<(), RemoteCallError>;

    /// Items in the order the cart service keeps them.
    async fn get_cart(&self, user_id: &str) -> Result<Vec<CartItem>, RemoteCallError>;

    async fn empty_cart(&self, user_id: &str) -> Result<(), RemoteCallError>;
}

/// gRPC implementation of [`CartService`].
#[derive(Clone)]
pub struct GrpcCartClient {
    endpoint: RemoteEndpoint,
}

impl GrpcCartClient {
    pub fn new(endpoint: RemoteEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl CartService for GrpcCartClient {
    #[instrument(skip(self))]
    async fn add_item(&self, user_id: &str, item: CartItem) -> Result<(), RemoteCallError> {
        debug!("Sending request");
        let item = pb::CartItem::try_from(item)
            .map_err(|failure| RemoteCallError::new(Service::Cart, "AddItem", failure))?;
        let request = pb::AddItemRequest {
            user_id: user_id.to_string(),
            item: Some(item),
        };
        self.endpoint
            .call("AddItem", |channel| async move {
                CartServiceClient::new(channel).add_item(request).await
            })
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_cart(&self, user_id: &str) -> Result<Vec<CartItem>, RemoteCallError> {
        debug!("Sending request");
        let request = pb::GetCartRequest {
            user_id: user_id.to_string(),
        };
        let cart = self
            .endpoint
            .call("GetCart", |channel| async move {
                CartServiceClient::new(channel).get_cart(request).await
            })
            .await?;
        cart.items
            .into_iter()
            .map(CartItem::try_from)
            .collect::<Result<_, _>>()
            .map_err(|failure| RemoteCallError::new(Service::Cart, "GetCart", failure))
    }

    #[instrument(skip(self))]
    async fn empty_cart(&self, user_id: &str) -> Result<(), RemoteCallError> {
        debug!("Sending request");
        let request = pb::EmptyCartRequest {
            user_id: user_id.to_string(),
        };
        self.endpoint
            .call("EmptyCart", |channel| async move {
                CartServiceClient::new(channel).empty_cart(request).await
            })
            .await?;
        Ok(())
    }
}

impl TryFrom<CartItem> for pb::CartItem {
    type Error = RemoteFailure;

    fn try_from(item: CartItem) -> Result<Self, Self::Error> {
        let quantity = i32::try_from(item.quantity).map_err(|_| {
            RemoteFailure::Malformed(format!("quantity {} does not fit the wire", item.quantity))
        })?;
        Ok(pb::CartItem {
            product_id: item.product_id,
            quantity,
        })
    }
}

impl TryFrom<pb::CartItem> for CartItem {
    type Error = RemoteFailure;

    fn try_from(item: pb::CartItem) -> Result<Self, Self::Error> {
        let quantity = u32::try_from(item.quantity).map_err(|_| {
            RemoteFailure::Malformed(format!(
                "negative quantity {} for product {}",
                item.quantity, item.product_id
            ))
        })?;
        Ok(CartItem::new(item.product_id, quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_item_wire_conversion() {
        let wire = pb::CartItem::try_from(CartItem::new("66VCHSJNUP", 3)).unwrap();
        assert_eq!(wire.product_id, "66VCHSJNUP");
        assert_eq!(wire.quantity, 3);

        let item = CartItem::try_from(pb::CartItem {
            product_id: "66VCHSJNUP".to_string(),
            quantity: 2,
        })
        .unwrap();
        assert_eq!(item, CartItem::new("66VCHSJNUP", 2));
    }

    #[test]
    fn test_oversized_quantity_is_not_clamped() {
        let err = pb::CartItem::try_from(CartItem::new("66VCHSJNUP", 3_000_000_000)).unwrap_err();
        assert!(matches!(err, RemoteFailure::Malformed(_)));
    }

    #[test]
    fn test_negative_remote_quantity_is_malformed() {
        let err = CartItem::try_from(pb::CartItem {
            product_id: "66VCHSJNUP".to_string(),
            quantity: -1,
        })
        .unwrap_err();
        assert_eq!(
            err,
            RemoteFailure::Malformed("negative quantity -1 for product 66VCHSJNUP".to_string())
        );
    }
}
