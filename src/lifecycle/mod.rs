//! # Lifecycle
//!
//! Starts the actors, wires the orchestrators to them, routes named
//! operations, and shuts everything down again.

pub mod dispatch;
pub mod system;
pub mod tracing;

pub use dispatch::*;
pub use system::*;
pub use self::tracing::setup_tracing;
