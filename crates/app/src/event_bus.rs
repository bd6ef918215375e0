//! In-process axis change bus with synchronous dispatch.

use std::sync::{Arc, Mutex};

use axisbind_domain::event::AxisChanged;
use axisbind_domain::id::SubscriptionId;

use crate::ports::{AxisChangeSource, AxisChangedHandler};
use crate::sync::lock;

/// In-process implementation of [`AxisChangeSource`].
///
/// [`publish`](Self::publish) runs every handler registered at the moment of
/// the call, in registration order, on the caller's thread. The handler list
/// is snapshotted first, so handlers may subscribe or unsubscribe while being
/// dispatched; such changes take effect on the next publish.
#[derive(Default)]
pub struct AxisChangeBus {
    handlers: Mutex<Vec<(SubscriptionId, AxisChangedHandler)>>,
}

impl AxisChangeBus {
    /// Create a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Broadcast `event` to all current subscribers.
    ///
    /// Returns the number of handlers invoked. Publishing with no subscribers
    /// is not an error.
    pub fn publish(&self, event: &AxisChanged) -> usize {
        let snapshot: Vec<AxisChangedHandler> = lock(&self.handlers)
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();

        tracing::trace!(axis = %event.axis, subscribers = snapshot.len(), "dispatching axis change");
        for handler in &snapshot {
            handler(event);
        }
        snapshot.len()
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        lock(&self.handlers).len()
    }
}

impl AxisChangeSource for AxisChangeBus {
    fn subscribe(&self, handler: AxisChangedHandler) -> SubscriptionId {
        let id = SubscriptionId::new();
        lock(&self.handlers).push((id, handler));
        tracing::debug!(subscription = %id, "axis change handler subscribed");
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = lock(&self.handlers);
        let before = handlers.len();
        handlers.retain(|(registered, _)| *registered != id);
        let removed = handlers.len() != before;
        drop(handlers);

        if removed {
            tracing::debug!(subscription = %id, "axis change handler unsubscribed");
        }
        removed
    }
}

impl std::fmt::Debug for AxisChangeBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxisChangeBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
