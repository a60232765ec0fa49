//! Plain data carried between the orchestrators and the remote services.

pub mod cart;
pub mod checkout;
pub mod product;

pub use cart::*;
pub use checkout::*;
pub use product::*;
