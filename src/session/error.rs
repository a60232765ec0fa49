//! Error types for the session actor.

use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The operation needs a user, and `set_user_id` has not been called for
    /// this session.
    #[error("User ID is not set.")]
    UserIdNotSet,

    /// The session actor is gone or dropped the reply.
    #[error("Session actor communication error: {0}")]
    ActorCommunicationError(String),
}
