use crate::bridge::{ExternalToolBridge, StdioToolChannel, ToolChannel};
use crate::clients::{
    CartService, CatalogService, CheckoutService, ConnectionProvider, FreshConnections,
    GrpcCartClient, GrpcCatalogClient, GrpcCheckoutClient, RemoteCallError, RemoteEndpoint,
    Service, SharedConnections,
};
use crate::config::Config;
use crate::fraud::{FileFraudList, FraudListSource, FraudScreen};
use crate::orchestrator::{
    CartOrchestrator, CatalogQueries, CheckoutOrchestrator, SunglassesRecommendation,
};
use crate::session::{self, SessionClient};
use std::sync::Arc;
use tracing::{error, info};

/// The outside world the agent depends on.
///
/// Production wiring builds these from [`Config`]; tests hand in mocks.
#[derive(Clone)]
pub struct Services {
    pub catalog: Arc<dyn CatalogService>,
    pub cart: Arc<dyn CartService>,
    pub checkout: Arc<dyn CheckoutService>,
    pub fraud_list: Arc<dyn FraudListSource>,
    pub tools: Arc<dyn ToolChannel>,
}

/// The running agent: the session actor, the orchestrators that share it,
/// and the tool bridge.
///
/// # Example
///
/// ```ignore
/// let system = BoutiqueSystem::new(&Config::from_env())?;
///
/// let outcome = system
///     .invoke("conversation-1", "set_user_id", json!({ "new_user_id": "alice" }))
///     .await;
///
/// system.shutdown().await?;
/// ```
pub struct BoutiqueSystem {
    pub sessions: SessionClient,
    pub catalog: CatalogQueries,
    pub cart: CartOrchestrator,
    pub checkout: CheckoutOrchestrator,
    pub tracker: ExternalToolBridge,

    /// Task handles for the actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BoutiqueSystem {
    /// Connects to the services named in `config` and starts the actors.
    ///
    /// Nothing is dialed here: channels connect on first use, and the
    /// tracker process starts on the first shipment query.
    pub fn new(config: &Config) -> Result<Self, RemoteCallError> {
        let connections: Arc<dyn ConnectionProvider> = if config.shared_connections {
            Arc::new(SharedConnections::new(&config.addresses, config.rpc_timeout)?)
        } else {
            Arc::new(FreshConnections::new(
                config.addresses.clone(),
                config.rpc_timeout,
            ))
        };
        let endpoint =
            |service| RemoteEndpoint::new(connections.clone(), service, config.rpc_timeout);

        let (tools, tool_handle) =
            StdioToolChannel::spawn(config.tracker.clone(), config.tool_timeout);

        let services = Services {
            catalog: Arc::new(GrpcCatalogClient::new(endpoint(Service::Catalog))),
            cart: Arc::new(GrpcCartClient::new(endpoint(Service::Cart))),
            checkout: Arc::new(GrpcCheckoutClient::new(endpoint(Service::Checkout))),
            fraud_list: Arc::new(FileFraudList::new(config.fraud_list.clone())),
            tools: Arc::new(tools),
        };

        let mut system = Self::with_services(services, config.currency.clone());
        system.handles.push(tool_handle);
        info!(
            catalog = %config.addresses.catalog,
            cart = %config.addresses.cart,
            checkout = %config.addresses.checkout,
            shared = config.shared_connections,
            "Boutique system started"
        );
        Ok(system)
    }

    /// Starts the session actor and wires the orchestrators over `services`.
    pub fn with_services(services: Services, currency: impl Into<String>) -> Self {
        let (session_actor, sessions) = session::new();
        let session_handle = tokio::spawn(session_actor.run());

        let catalog = CatalogQueries::new(services.catalog.clone());
        let cart = CartOrchestrator::new(sessions.clone(), services.catalog, services.cart)
            .with_hook(Arc::new(SunglassesRecommendation));
        let checkout = CheckoutOrchestrator::new(
            sessions.clone(),
            FraudScreen::new(services.fraud_list),
            services.checkout,
            currency,
        );

        Self {
            sessions,
            catalog,
            cart,
            checkout,
            tracker: ExternalToolBridge::new(services.tools),
            handles: vec![session_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes the actors' channels; each actor then
    /// drains and exits. Fails if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.sessions);
        drop(self.catalog);
        drop(self.cart);
        drop(self.checkout);
        drop(self.tracker);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(format!("Actor task failed: {e}"));
            }
        }

        info!("System shutdown complete");
        Ok(())
    }
}
