//! # Connection Providers
//!
//! Every remote call asks a [`ConnectionProvider`] for a channel to its
//! service. The orchestrators never see how the channel was obtained, so the
//! choice between a fresh connection per call ([`FreshConnections`]) and one
//! shared, lazily-connected channel per service ([`SharedConnections`]) is a
//! wiring decision made in [`lifecycle`](crate::lifecycle).

use super::error::{RemoteCallError, RemoteFailure, Service};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, warn};

/// Addresses of the three remote services, e.g. `http://localhost:3550`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceAddresses {
    pub catalog: String,
    pub cart: String,
    pub checkout: String,
}

impl ServiceAddresses {
    pub fn for_service(&self, service: Service) -> &str {
        match service {
            Service::Catalog => &self.catalog,
            Service::Cart => &self.cart,
            Service::Checkout => &self.checkout,
        }
    }
}

/// Hands out channels to the remote services.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    async fn channel(&self, service: Service) -> Result<Channel, RemoteFailure>;
}

/// Opens a new connection for every call.
#[derive(Debug, Clone)]
pub struct FreshConnections {
    addresses: ServiceAddresses,
    connect_timeout: Duration,
}

impl FreshConnections {
    pub fn new(addresses: ServiceAddresses, connect_timeout: Duration) -> Self {
        Self {
            addresses,
            connect_timeout,
        }
    }
}

#[async_trait]
impl ConnectionProvider for FreshConnections {
    async fn channel(&self, service: Service) -> Result<Channel, RemoteFailure> {
        let address = self.addresses.for_service(service);
        debug!(%service, address, "Connecting");
        Endpoint::from_shared(address.to_string())
            .map_err(|e| RemoteFailure::Connect(format!("invalid address {address}: {e}")))?
            .connect_timeout(self.connect_timeout)
            .connect()
            .await
            .map_err(|e| RemoteFailure::Connect(e.to_string()))
    }
}

/// One lazily-connected channel per service, cloned for each call.
///
/// tonic channels multiplex requests over a single HTTP/2 connection and
/// reconnect on their own, so cloning is all the pooling needed.
#[derive(Debug, Clone)]
pub struct SharedConnections {
    catalog: Channel,
    cart: Channel,
    checkout: Channel,
}

impl SharedConnections {
    /// Must be called from within a Tokio runtime.
    pub fn new(
        addresses: &ServiceAddresses,
        connect_timeout: Duration,
    ) -> Result<Self, RemoteCallError> {
        let lazy = |service: Service| -> Result<Channel, RemoteCallError> {
            let address = addresses.for_service(service);
            Endpoint::from_shared(address.to_string())
                .map(|endpoint| endpoint.connect_timeout(connect_timeout).connect_lazy())
                .map_err(|e| {
                    RemoteCallError::new(
                        service,
                        "connect",
                        RemoteFailure::Connect(format!("invalid address {address}: {e}")),
                    )
                })
        };
        Ok(Self {
            catalog: lazy(Service::Catalog)?,
            cart: lazy(Service::Cart)?,
            checkout: lazy(Service::Checkout)?,
        })
    }
}

#[async_trait]
impl ConnectionProvider for SharedConnections {
    async fn channel(&self, service: Service) -> Result<Channel, RemoteFailure> {
        let channel = match service {
            Service::Catalog => &self.catalog,
            Service::Cart => &self.cart,
            Service::Checkout => &self.checkout,
        };
        Ok(channel.clone())
    }
}

/// A service as seen by one client: where to get channels and how long a
/// call may take, connection included.
#[derive(Clone)]
pub struct RemoteEndpoint {
    connections: Arc<dyn ConnectionProvider>,
    service: Service,
    timeout: Duration,
}

impl RemoteEndpoint {
    pub fn new(
        connections: Arc<dyn ConnectionProvider>,
        service: Service,
        timeout: Duration,
    ) -> Self {
        Self {
            connections,
            service,
            timeout,
        }
    }

    /// Runs exactly one request/response exchange against the service.
    pub async fn call<T, F, Fut>(
        &self,
        operation: &'static str,
        call: F,
    ) -> Result<T, RemoteCallError>
    where
        F: FnOnce(Channel) -> Fut + Send,
        Fut: Future<Output = Result<tonic::Response<T>, tonic::Status>> + Send,
        T: Send,
    {
        let service = self.service;
        let exchange = async {
            let channel = self.connections.channel(service).await?;
            call(channel)
                .await
                .map(tonic::Response::into_inner)
                .map_err(RemoteFailure::from)
        };

        let result = match tokio::time::timeout(self.timeout, exchange).await {
            Ok(result) => result,
            Err(_) => Err(RemoteFailure::Timeout(self.timeout)),
        };

        result.map_err(|failure| {
            warn!(%service, operation, error = %failure, "Remote call failed");
            RemoteCallError::new(service, operation, failure)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unreachable;

    #[async_trait]
    impl ConnectionProvider for Unreachable {
        async fn channel(&self, _service: Service) -> Result<Channel, RemoteFailure> {
            Err(RemoteFailure::Connect("connection refused".to_string()))
        }
    }

    struct Hanging;

    #[async_trait]
    impl ConnectionProvider for Hanging {
        async fn channel(&self, _service: Service) -> Result<Channel, RemoteFailure> {
            std::future::pending().await
        }
    }

    fn addresses() -> ServiceAddresses {
        ServiceAddresses {
            catalog: "http://localhost:3550".to_string(),
            cart: "http://localhost:7070".to_string(),
            checkout: "http://localhost:5050".to_string(),
        }
    }

    #[tokio::test]
    async fn test_connect_failure_is_reported_with_service_and_operation() {
        let endpoint =
            RemoteEndpoint::new(Arc::new(Unreachable), Service::Cart, Duration::from_secs(1));
        let err = endpoint
            .call("GetCart", |_channel| async { Ok(tonic::Response::new(())) })
            .await
            .unwrap_err();

        assert_eq!(err.service, Service::Cart);
        assert_eq!(err.operation, "GetCart");
        assert!(matches!(err.failure, RemoteFailure::Connect(_)));
    }

    #[tokio::test]
    async fn test_call_times_out() {
        let endpoint = RemoteEndpoint::new(
            Arc::new(Hanging),
            Service::Catalog,
            Duration::from_millis(20),
        );
        let err = endpoint
            .call("ListProducts", |_channel| async { Ok(tonic::Response::new(())) })
            .await
            .unwrap_err();

        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn test_fresh_connections_reject_invalid_address() {
        let mut bad = addresses();
        bad.checkout = "not a uri".to_string();
        let provider = FreshConnections::new(bad, Duration::from_millis(50));

        let failure = provider.channel(Service::Checkout).await.unwrap_err();
        assert!(matches!(failure, RemoteFailure::Connect(msg) if msg.contains("invalid address")));
    }

    #[tokio::test]
    async fn test_shared_connections_build_lazily() {
        // No server is listening; lazy channels must still be constructible.
        let provider = SharedConnections::new(&addresses(), Duration::from_millis(50)).unwrap();
        assert!(provider.channel(Service::Catalog).await.is_ok());
    }

    #[test]
    fn test_addresses_per_service() {
        let addresses = addresses();
        assert_eq!(addresses.for_service(Service::Cart), "http://localhost:7070");
        assert_eq!(addresses.for_service(Service::Checkout), "http://localhost:5050");
    }
}
