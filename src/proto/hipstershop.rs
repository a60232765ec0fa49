// Message and client definitions for the subset of `hipstershop` (demo.proto)
// used by the agent: catalog, cart and checkout. Field tags match demo.proto.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CartItem {
    #[prost(string, tag = "1")]
    pub product_id: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub quantity: i32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddItemRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub item: ::core::option::Option<CartItem>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EmptyCartRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCartRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Cart {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub items: ::prost::alloc::vec::Vec<CartItem>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Empty {}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Money {
    #[prost(string, tag = "1")]
    pub currency_code: ::prost::alloc::string::String,
    #[prost(int64, tag = "2")]
    pub units: i64,
    #[prost(int32, tag = "3")]
    pub nanos: i32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Product {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub description: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub picture: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "5")]
    pub price_usd: ::core::option::Option<Money>,
    #[prost(string, repeated, tag = "6")]
    pub categories: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListProductsResponse {
    #[prost(message, repeated, tag = "1")]
    pub products: ::prost::alloc::vec::Vec<Product>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProductRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchProductsRequest {
    #[prost(string, tag = "1")]
    pub query: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SearchProductsResponse {
    #[prost(message, repeated, tag = "1")]
    pub results: ::prost::alloc::vec::Vec<Product>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Address {
    #[prost(string, tag = "1")]
    pub street_address: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub city: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub state: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub country: ::prost::alloc::string::String,
    #[prost(int32, tag = "5")]
    pub zip_code: i32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreditCardInfo {
    #[prost(string, tag = "1")]
    pub credit_card_number: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub credit_card_cvv: i32,
    #[prost(int32, tag = "3")]
    pub credit_card_expiration_year: i32,
    #[prost(int32, tag = "4")]
    pub credit_card_expiration_month: i32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OrderItem {
    #[prost(message, optional, tag = "1")]
    pub item: ::core::option::Option<CartItem>,
    #[prost(message, optional, tag = "2")]
    pub cost: ::core::option::Option<Money>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OrderResult {
    #[prost(string, tag = "1")]
    pub order_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub shipping_tracking_id: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub shipping_cost: ::core::option::Option<Money>,
    #[prost(message, optional, tag = "4")]
    pub shipping_address: ::core::option::Option<Address>,
    #[prost(message, repeated, tag = "5")]
    pub items: ::prost::alloc::vec::Vec<OrderItem>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PlaceOrderRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub user_currency: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub address: ::core::option::Option<Address>,
    #[prost(string, tag = "5")]
    pub email: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "6")]
    pub credit_card: ::core::option::Option<CreditCardInfo>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PlaceOrderResponse {
    #[prost(message, optional, tag = "1")]
    pub order: ::core::option::Option<OrderResult>,
}
/// Client implementations, bound to a tonic [`Channel`](tonic::transport::Channel).
pub mod product_catalog_service_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::http;
    use tonic::transport::Channel;
    #[derive(Debug, Clone)]
    pub struct ProductCatalogServiceClient {
        inner: tonic::client::Grpc<Channel>,
    }
    impl ProductCatalogServiceClient {
        pub fn new(channel: Channel) -> Self {
            let inner = tonic::client::Grpc::new(channel);
            Self { inner }
        }
        pub async fn list_products(
            &mut self,
            request: impl tonic::IntoRequest<super::Empty>,
        ) -> Result<tonic::Response<super::ListProductsResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {e}")))?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/hipstershop.ProductCatalogService/ListProducts",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn get_product(
            &mut self,
            request: impl tonic::IntoRequest<super::GetProductRequest>,
        ) -> Result<tonic::Response<super::Product>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {e}")))?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/hipstershop.ProductCatalogService/GetProduct",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn search_products(
            &mut self,
            request: impl tonic::IntoRequest<super::SearchProductsRequest>,
        ) -> Result<tonic::Response<super::SearchProductsResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {e}")))?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/hipstershop.ProductCatalogService/SearchProducts",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}
pub mod cart_service_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::http;
    use tonic::transport::Channel;
    #[derive(Debug, Clone)]
    pub struct CartServiceClient {
        inner: tonic::client::Grpc<Channel>,
    }
    impl CartServiceClient {
        pub fn new(channel: Channel) -> Self {
            let inner = tonic::client::Grpc::new(channel);
            Self { inner }
        }
        pub async fn add_item(
            &mut self,
            request: impl tonic::IntoRequest<super::AddItemRequest>,
        ) -> Result<tonic::Response<super::Empty>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {e}")))?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/hipstershop.CartService/AddItem");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn get_cart(
            &mut self,
            request: impl tonic::IntoRequest<super::GetCartRequest>,
        ) -> Result<tonic::Response<super::Cart>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {e}")))?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/hipstershop.CartService/GetCart");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn empty_cart(
            &mut self,
            request: impl tonic::IntoRequest<super::EmptyCartRequest>,
        ) -> Result<tonic::Response<super::Empty>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {e}")))?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/hipstershop.CartService/EmptyCart");
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}
pub mod checkout_service_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::http;
    use tonic::transport::Channel;
    #[derive(Debug, Clone)]
    pub struct CheckoutServiceClient {
        inner: tonic::client::Grpc<Channel>,
    }
    impl CheckoutServiceClient {
        pub fn new(channel: Channel) -> Self {
            let inner = tonic::client::Grpc::new(channel);
            Self { inner }
        }
        pub async fn place_order(
            &mut self,
            request: impl tonic::IntoRequest<super::PlaceOrderRequest>,
        ) -> Result<tonic::Response<super::PlaceOrderResponse>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {e}")))?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/hipstershop.CheckoutService/PlaceOrder",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}
