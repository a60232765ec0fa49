//! # Session Store
//!
//! Conversation state lives in a single actor task. Each conversation is a
//! [`Session`] keyed by a caller-supplied [`SessionId`]; nothing is global, so
//! two conversations can never see each other's user or orders.
//!
//! ## Structure
//!
//! - [`entity`] - the [`Session`] itself and how it applies actions
//! - [`actions`] - [`SessionAction`] and [`SessionActionResult`]
//! - [`actor`] - the [`SessionActor`] event loop
//! - [`client`] - [`SessionClient`], the handle the orchestrators hold
//! - [`error`] - [`SessionError`]
//!
//! ## Usage
//!
//! ```rust
//! use boutique_agent::session;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = session::new();
//!     tokio::spawn(actor.run());
//!
//!     client.set_user_id("conversation-1", "alice").await.unwrap();
//!     assert_eq!(client.require_user("conversation-1").await.unwrap(), "alice");
//! }
//! ```

pub mod actions;
pub mod actor;
pub mod client;
pub mod entity;
pub mod error;

pub use actions::*;
pub use actor::*;
pub use client::*;
pub use entity::*;
pub use error::*;

/// Creates a new session actor and its client.
pub fn new() -> (SessionActor, SessionClient) {
    SessionActor::new(64)
}
