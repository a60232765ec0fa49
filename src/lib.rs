#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Boutique Agent
//!
//! > **The tool layer of a conversational shopping assistant.**
//!
//! A front end (a chat model, a CLI, a test) asks for named operations:
//! set the user, add "Sunglasses" to the cart, place an order, track it.
//! This crate turns each request into calls against the Online Boutique
//! microservices (catalog, cart, checkout over gRPC), keeps per-conversation
//! state, screens cards against a local fraud list, and talks to a shipment
//! tracker running as a child process. Every operation answers with one
//! structured [`ToolOutcome`](envelope::ToolOutcome).
//!
//! ## 🏗️ Design Philosophy
//!
//! - **Sessions are actors.** All conversation state lives in one task that
//!   processes messages in order. Nothing is global; each conversation is
//!   keyed by the session id the caller supplies.
//! - **Services are traits.** Orchestrators only see [`CatalogService`](clients::CatalogService),
//!   [`CartService`](clients::CartService), [`CheckoutService`](clients::CheckoutService),
//!   [`FraudListSource`](fraud::FraudListSource) and [`ToolChannel`](bridge::ToolChannel),
//!   so tests swap in the mocks from [`mock`].
//! - **Failures are values.** Each component has its own `thiserror` enum and
//!   the envelope layer turns every error into a result the caller can show.
//!
//! ## 🚀 Core Flow
//!
//! ```text
//! Invocation ──► lifecycle::dispatch ──► orchestrator ──► session actor
//!                                              │
//!                                              ├──► catalog / cart / checkout (gRPC)
//!                                              ├──► fraud screen (local file)
//!                                              └──► tool bridge ──► tracker process (MCP)
//! ```
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. State ([`session`])
//! - **Role**: who the user is and which tracking id belongs to which order,
//!   per conversation, plus the lock that serializes checkouts.
//! - **Key items**: [`SessionActor`](session::SessionActor),
//!   [`SessionClient`](session::SessionClient).
//!
//! ### 2. The Outside World ([`clients`], [`fraud`], [`bridge`])
//! - **Role**: one typed call per remote method, each with a deadline; the
//!   blocked-card list; the shipment tracker subprocess.
//! - **Key items**: [`RemoteEndpoint`](clients::RemoteEndpoint),
//!   [`FraudScreen`](fraud::FraudScreen), [`StdioToolChannel`](bridge::StdioToolChannel).
//!
//! ### 3. The Orchestrators ([`orchestrator`], [`resolver`])
//! - **Role**: compose the calls into cart, checkout and catalog operations.
//! - **Key items**: [`CartOrchestrator`](orchestrator::CartOrchestrator),
//!   [`CheckoutOrchestrator`](orchestrator::CheckoutOrchestrator),
//!   [`ProductResolver`](resolver::ProductResolver).
//!
//! ### 4. Wiring ([`lifecycle`], [`config`], [`envelope`])
//! - **Role**: build everything from the environment, route named operations,
//!   shape their results, shut down cleanly.
//! - **Key items**: [`BoutiqueSystem`](lifecycle::BoutiqueSystem), [`Config`](config::Config).
//!
//! ## 🚀 Quick Start
//!
//! ```rust,ignore
//! use boutique_agent::config::Config;
//! use boutique_agent::lifecycle::BoutiqueSystem;
//! use serde_json::json;
//!
//! let system = BoutiqueSystem::new(&Config::from_env())?;
//! system.invoke("s1", "set_user_id", json!({ "new_user_id": "alice" })).await;
//! let outcome = system
//!     .invoke("s1", "add_item_to_cart", json!({ "product_name": "Mug", "quantity": 2 }))
//!     .await;
//! println!("{}", serde_json::to_string(&outcome)?);
//! system.shutdown().await?;
//! ```

pub mod bridge;
pub mod clients;
pub mod config;
pub mod envelope;
pub mod fraud;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod orchestrator;
pub mod proto;
pub mod resolver;
pub mod session;
