//! Error types for remote service calls.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// The remote services the agent talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Catalog,
    Cart,
    Checkout,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Service::Catalog => "catalog",
            Service::Cart => "cart",
            Service::Checkout => "checkout",
        };
        f.write_str(name)
    }
}

/// Why a single remote call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteFailure {
    /// No connection could be established.
    #[error("could not connect: {0}")]
    Connect(String),

    /// The service answered with a non-OK gRPC status.
    #[error("{code}: {message}")]
    Rejected { code: String, message: String },

    /// No answer within the per-call deadline.
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// The service answered OK but left out something we need.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<tonic::Status> for RemoteFailure {
    fn from(status: tonic::Status) -> Self {
        RemoteFailure::Rejected {
            code: format!("{:?}", status.code()),
            message: status.message().to_string(),
        }
    }
}

/// A failed call to one of the remote services. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{service} service call {operation} failed: {failure}")]
pub struct RemoteCallError {
    pub service: Service,
    pub operation: &'static str,
    pub failure: RemoteFailure,
}

impl RemoteCallError {
    pub fn new(service: Service, operation: &'static str, failure: RemoteFailure) -> Self {
        Self {
            service,
            operation,
            failure,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.failure, RemoteFailure::Timeout(_))
    }
}
