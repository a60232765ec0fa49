//! # Orchestrators
//!
//! Each orchestrator turns one caller-facing operation into a short sequence
//! of session lookups and remote calls, issued one after another.
//!
//! - [`CartOrchestrator`] - add, view and empty the user's cart
//! - [`CheckoutOrchestrator`] - place orders and hand out tracking ids
//! - [`CatalogQueries`] - product listing, search and price lookup
//!
//! Everything that needs a user checks the session first, so a conversation
//! without `set_user_id` never reaches the remote services.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod recommend;

pub use cart::*;
pub use catalog::*;
pub use checkout::*;
pub use error::*;
pub use recommend::*;
