//! Axis change port — subscribe to the service-wide "axis changed" broadcast.

use std::sync::Arc;

use axisbind_domain::event::AxisChanged;
use axisbind_domain::id::SubscriptionId;

/// Callback invoked for every broadcast, whatever axis it concerns.
pub type AxisChangedHandler = Arc<dyn Fn(&AxisChanged) + Send + Sync>;

/// Source of axis change notifications.
///
/// Implementations invoke handlers synchronously on the thread that raises
/// the change, and must not hold internal locks while doing so: a handler is
/// allowed to call [`unsubscribe`](Self::unsubscribe) from inside its own
/// invocation.
pub trait AxisChangeSource {
    /// Register `handler` for all future broadcasts.
    fn subscribe(&self, handler: AxisChangedHandler) -> SubscriptionId;

    /// Remove a registration. Returns `false` if `id` was not registered.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

impl<T: AxisChangeSource + ?Sized> AxisChangeSource for Arc<T> {
    fn subscribe(&self, handler: AxisChangedHandler) -> SubscriptionId {
        (**self).subscribe(handler)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        (**self).unsubscribe(id)
    }
}
