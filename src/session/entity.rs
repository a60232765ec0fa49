//! The per-conversation state kept by the session actor.

use super::actions::{SessionAction, SessionActionResult};
use super::error::SessionError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

/// Identifies one conversation. Supplied by the caller.
pub type SessionId = String;

/// State for one conversation: who the user is, and which tracking id
/// belongs to each order placed so far.
///
/// The tracking registry only grows; entries are never evicted while the
/// process runs.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub user_id: Option<String>,
    pub orders: HashMap<String, String>,
    checkout_lock: Arc<Mutex<()>>,
}

impl Session {
    pub fn new(id: impl Into<SessionId>) -> Self {
        Self {
            id: id.into(),
            user_id: None,
            orders: HashMap::new(),
            checkout_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Applies one action to this session.
    pub fn handle_action(
        &mut self,
        action: SessionAction,
    ) -> Result<SessionActionResult, SessionError> {
        match action {
            SessionAction::SetUserId(user_id) => {
                let previous = self.user_id.replace(user_id);
                if let Some(previous) = &previous {
                    warn!(session_id = %self.id, %previous, "User ID replaced");
                }
                Ok(SessionActionResult::SetUserId(previous))
            }
            SessionAction::CurrentUser => self
                .user_id
                .clone()
                .map(SessionActionResult::CurrentUser)
                .ok_or(SessionError::UserIdNotSet),
            SessionAction::RecordOrder {
                order_id,
                tracking_id,
            } => {
                self.orders.insert(order_id, tracking_id);
                Ok(SessionActionResult::RecordOrder(()))
            }
            SessionAction::TrackingFor(order_id) => Ok(SessionActionResult::TrackingFor(
                self.orders.get(&order_id).cloned(),
            )),
            SessionAction::CheckoutLock => {
                Ok(SessionActionResult::CheckoutLock(self.checkout_lock.clone()))
            }
        }
    }
}
