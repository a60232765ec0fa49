//! # Session Client
//!
//! A cheap-to-clone handle for talking to the [`SessionActor`](super::SessionActor).
//! It hides the request/response plumbing behind one method per operation.

use super::actions::{SessionAction, SessionActionResult};
use super::actor::SessionRequest;
use super::entity::Session;
use super::error::SessionError;
use crate::model::PlacedOrder;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, Mutex};
use tracing::{debug, instrument};

/// Client for interacting with the session actor.
#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionClient {
    pub fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    /// Binds the session to a user and returns the user id it replaced.
    #[instrument(skip(self))]
    pub async fn set_user_id(
        &self,
        session_id: &str,
        user_id: &str,
    ) -> Result<Option<String>, SessionError> {
        debug!("Sending request");
        match self
            .perform_action(session_id, SessionAction::SetUserId(user_id.to_string()))
            .await?
        {
            SessionActionResult::SetUserId(previous) => Ok(previous),
            other => Err(mismatch("SetUserId", &other)),
        }
    }

    /// The session's user, or [`SessionError::UserIdNotSet`].
    #[instrument(skip(self))]
    pub async fn require_user(&self, session_id: &str) -> Result<String, SessionError> {
        debug!("Sending request");
        match self
            .perform_action(session_id, SessionAction::CurrentUser)
            .await?
        {
            SessionActionResult::CurrentUser(user_id) => Ok(user_id),
            other => Err(mismatch("CurrentUser", &other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn record_order(
        &self,
        session_id: &str,
        order: &PlacedOrder,
    ) -> Result<(), SessionError> {
        debug!("Sending request");
        let action = SessionAction::RecordOrder {
            order_id: order.order_id.clone(),
            tracking_id: order.tracking_id.clone(),
        };
        match self.perform_action(session_id, action).await? {
            SessionActionResult::RecordOrder(()) => Ok(()),
            other => Err(mismatch("RecordOrder", &other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn tracking_id(
        &self,
        session_id: &str,
        order_id: &str,
    ) -> Result<Option<String>, SessionError> {
        debug!("Sending request");
        match self
            .perform_action(session_id, SessionAction::TrackingFor(order_id.to_string()))
            .await?
        {
            SessionActionResult::TrackingFor(tracking_id) => Ok(tracking_id),
            other => Err(mismatch("TrackingFor", &other)),
        }
    }

    /// The lock that serializes order placement within one session.
    #[instrument(skip(self))]
    pub async fn checkout_lock(&self, session_id: &str) -> Result<Arc<Mutex<()>>, SessionError> {
        match self
            .perform_action(session_id, SessionAction::CheckoutLock)
            .await?
        {
            SessionActionResult::CheckoutLock(lock) => Ok(lock),
            other => Err(mismatch("CheckoutLock", &other)),
        }
    }

    pub async fn get(&self, session_id: &str) -> Result<Option<Session>, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Get {
                id: session_id.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| SessionError::ActorCommunicationError("actor closed".to_string()))?;
        response.await.map_err(|_| {
            SessionError::ActorCommunicationError("actor dropped response".to_string())
        })?
    }

    async fn perform_action(
        &self,
        session_id: &str,
        action: SessionAction,
    ) -> Result<SessionActionResult, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Action {
                id: session_id.to_string(),
                action,
                respond_to,
            })
            .await
            .map_err(|_| SessionError::ActorCommunicationError("actor closed".to_string()))?;
        response.await.map_err(|_| {
            SessionError::ActorCommunicationError("actor dropped response".to_string())
        })?
    }
}

fn mismatch(expected: &str, got: &SessionActionResult) -> SessionError {
    SessionError::ActorCommunicationError(format!(
        "{expected} answered with unexpected result {got:?}"
    ))
}

#[cfg(test)]
mod tests {
    use super::super::SessionActor;
    use super::*;

    #[tokio::test]
    async fn test_record_and_lookup_tracking() {
        let (actor, client) = SessionActor::new(8);
        tokio::spawn(actor.run());

        let order = PlacedOrder {
            order_id: "order-1".to_string(),
            tracking_id: "TRK-42".to_string(),
        };
        client.record_order("s1", &order).await.unwrap();

        assert_eq!(
            client.tracking_id("s1", "order-1").await.unwrap().as_deref(),
            Some("TRK-42")
        );
        assert!(client.tracking_id("s2", "order-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_checkout_lock_is_per_session() {
        let (actor, client) = SessionActor::new(8);
        tokio::spawn(actor.run());

        let a1 = client.checkout_lock("a").await.unwrap();
        let a2 = client.checkout_lock("a").await.unwrap();
        let b = client.checkout_lock("b").await.unwrap();

        assert!(Arc::ptr_eq(&a1, &a2));
        assert!(!Arc::ptr_eq(&a1, &b));

        let _held = a1.lock().await;
        assert!(a2.try_lock().is_err());
        assert!(b.try_lock().is_ok());
    }
}
