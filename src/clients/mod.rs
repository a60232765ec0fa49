//! Typed wrappers around the catalog, cart and checkout gRPC services.
//!
//! Each service is a trait ([`CatalogService`], [`CartService`],
//! [`CheckoutService`]) so the orchestrators can be driven by the mocks in
//! [`crate::mock`]. The `Grpc*Client` types are the production
//! implementations; each call is a single request/response exchange with a
//! deadline, and every failure comes back as a [`RemoteCallError`].

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod connection;
pub mod error;

pub use cart::*;
pub use catalog::*;
pub use checkout::*;
pub use connection::*;
pub use error::*;
