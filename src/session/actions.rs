//! Operations the session actor performs on a single [`Session`](super::Session).

use std::sync::Arc;
use tokio::sync::Mutex;

/// Things that can be done to one session.
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Binds the conversation to a user.
    SetUserId(String),
    /// Reads the bound user, failing if there is none.
    CurrentUser,
    /// Appends an entry to the tracking registry.
    RecordOrder { order_id: String, tracking_id: String },
    /// Looks up the tracking id recorded for an order.
    TrackingFor(String),
    /// Hands out the session's checkout lock.
    CheckoutLock,
}

/// Results from [`SessionAction`]s - variants match 1:1.
#[derive(Debug, Clone)]
pub enum SessionActionResult {
    /// The user id that was replaced, if any.
    SetUserId(Option<String>),
    CurrentUser(String),
    RecordOrder(()),
    TrackingFor(Option<String>),
    CheckoutLock(Arc<Mutex<()>>),
}
