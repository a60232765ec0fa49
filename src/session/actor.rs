//! # Session Actor
//!
//! The server half of the session store. It owns every [`Session`] and
//! processes [`SessionRequest`]s one at a time, so session state needs no
//! locks and two requests for the same session can never interleave.

use super::actions::{SessionAction, SessionActionResult};
use super::client::SessionClient;
use super::entity::{Session, SessionId};
use super::error::SessionError;
use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, SessionError>>;

/// Messages the [`SessionClient`] sends to the actor.
#[derive(Debug)]
pub enum SessionRequest {
    /// Snapshot of a session, `None` if it was never touched.
    Get {
        id: SessionId,
        respond_to: Response<Option<Session>>,
    },
    /// Applies an action, opening the session first if needed.
    Action {
        id: SessionId,
        action: SessionAction,
        respond_to: Response<SessionActionResult>,
    },
}

/// Owns all sessions for the lifetime of the process.
pub struct SessionActor {
    receiver: mpsc::Receiver<SessionRequest>,
    store: HashMap<SessionId, Session>,
}

impl SessionActor {
    pub fn new(buffer_size: usize) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        (actor, SessionClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!("Session actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Get { id, respond_to } => {
                    let session = self.store.get(&id).cloned();
                    debug!(session_id = %id, found = session.is_some(), "Get");
                    let _ = respond_to.send(Ok(session));
                }
                SessionRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(session_id = %id, ?action, "Action");
                    let session = self.store.entry(id.clone()).or_insert_with(|| {
                        info!(session_id = %id, "Session opened");
                        Session::new(id.clone())
                    });
                    let result = session.handle_action(action);
                    match &result {
                        Ok(_) => debug!(session_id = %id, "Action ok"),
                        Err(e) => warn!(session_id = %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(sessions = self.store.len(), "Session actor shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let (actor, client) = SessionActor::new(8);
        let handle = tokio::spawn(actor.run());

        client.set_user_id("s1", "alice").await.unwrap();
        assert_eq!(client.require_user("s1").await.unwrap(), "alice");
        assert_eq!(
            client.require_user("s2").await.unwrap_err(),
            SessionError::UserIdNotSet
        );

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_get_unknown_session_is_none() {
        let (actor, client) = SessionActor::new(8);
        let handle = tokio::spawn(actor.run());

        assert!(client.get("nobody").await.unwrap().is_none());
        client.set_user_id("s1", "alice").await.unwrap();
        let session = client.get("s1").await.unwrap().unwrap();
        assert_eq!(session.user_id.as_deref(), Some("alice"));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_actor_reports_communication_error() {
        let (actor, client) = SessionActor::new(8);
        drop(actor);

        let err = client.require_user("s1").await.unwrap_err();
        assert!(matches!(err, SessionError::ActorCommunicationError(_)));
    }
}
