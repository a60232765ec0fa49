//! Wire types for the Online Boutique gRPC services.

pub mod hipstershop;
