//! Axis binding — listens to one named axis of an input service.
//!
//! An [`AxisBinding`] holds an axis name, proxies the service's processed and
//! raw readings for that name, and forwards the service-wide change broadcast
//! to its own observers whenever the changed axis matches the name
//! (case-insensitive, evaluated at broadcast time).
//!
//! The binding registers with the service on construction and deregisters on
//! [`AxisBinding::release`] or when dropped, whichever comes first.

use std::sync::{Arc, Mutex, RwLock, Weak};

use axisbind_domain::axis::AxisName;
use axisbind_domain::event::AxisChanged;
use axisbind_domain::id::{ObserverId, SubscriptionId};

use crate::ports::{AxisChangeSource, AxisChangedHandler, AxisQuery};
use crate::sync::{lock, read, write};

type Observer = Arc<dyn Fn() + Send + Sync>;

/// State reachable from the handler registered with the service.
///
/// The handler only keeps a [`Weak`] to it, so a registration that outlives
/// its binding finds nothing to notify.
#[derive(Default)]
struct Shared {
    name: RwLock<AxisName>,
    observers: Mutex<Vec<(ObserverId, Observer)>>,
}

impl Shared {
    fn dispatch(&self, event: &AxisChanged) {
        let name = read(&self.name).clone();
        if !event.concerns(&name) {
            return;
        }

        let observers: Vec<Observer> = lock(&self.observers)
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        tracing::trace!(axis = %name, observers = observers.len(), "axis value changed");
        for observer in &observers {
            observer();
        }
    }

    fn handler(self: &Arc<Self>) -> AxisChangedHandler {
        let weak: Weak<Self> = Arc::downgrade(self);
        Arc::new(move |event: &AxisChanged| {
            if let Some(shared) = weak.upgrade() {
                shared.dispatch(event);
            }
        })
    }
}

/// Virtual input axis binding.
///
/// ```ignore
/// let input = Arc::new(VirtualInput::new());
/// let horizontal = AxisBinding::with_name(Arc::clone(&input), "Horizontal");
/// horizontal.on_value_changed(|| println!("moved"));
/// input.set_axis("horizontal", 0.5, 0.5)?; // prints "moved"
/// assert_eq!(horizontal.value(), 0.5);
/// ```
pub struct AxisBinding<S: AxisChangeSource> {
    service: S,
    shared: Arc<Shared>,
    subscription: Option<SubscriptionId>,
}

impl<S: AxisChangeSource> AxisBinding<S> {
    /// Create an unnamed binding (its name is empty).
    pub fn new(service: S) -> Self {
        Self::with_name(service, AxisName::default())
    }

    /// Create a binding for the axis called `name`.
    pub fn with_name(service: S, name: impl Into<AxisName>) -> Self {
        let name = name.into();
        tracing::debug!(axis = %name, "registering axis binding");
        let shared = Arc::new(Shared {
            name: RwLock::new(name),
            observers: Mutex::default(),
        });
        let subscription = service.subscribe(shared.handler());

        Self {
            service,
            shared,
            subscription: Some(subscription),
        }
    }

    /// The bound axis name.
    #[must_use]
    pub fn name(&self) -> AxisName {
        read(&self.shared.name).clone()
    }

    /// Rebind to another axis.
    ///
    /// Only broadcasts raised after this call are matched against the new
    /// name; nothing is re-registered with the service.
    pub fn set_name(&self, name: impl Into<AxisName>) {
        let name = name.into();
        tracing::debug!(axis = %name, "axis binding renamed");
        *write(&self.shared.name) = name;
    }

    /// Add an observer, invoked with no payload each time the bound axis
    /// changes. Observers run in the order they were added.
    pub fn on_value_changed<F>(&self, observer: F) -> ObserverId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = ObserverId::new();
        let observer: Observer = Arc::new(observer);
        lock(&self.shared.observers).push((id, observer));
        id
    }

    /// Remove an observer. Returns `false` if `id` is unknown.
    pub fn remove_observer(&self, id: ObserverId) -> bool {
        let mut observers = lock(&self.shared.observers);
        let before = observers.len();
        observers.retain(|(registered, _)| *registered != id);
        observers.len() != before
    }

    /// Number of observers currently registered.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        lock(&self.shared.observers).len()
    }

    /// Deregister from the service's change broadcast.
    ///
    /// After this call no observer is invoked again. Calling it more than
    /// once does nothing. Readings keep working after release.
    pub fn release(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.service.unsubscribe(subscription);
            tracing::debug!(axis = %self.name(), %subscription, "axis binding released");
        }
    }

    /// Whether [`release`](Self::release) has already run.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.subscription.is_none()
    }
}

impl<S: AxisChangeSource + AxisQuery> AxisBinding<S> {
    /// Current processed value of the bound axis.
    ///
    /// Read from the service on every call. An axis unknown to the service
    /// yields the service's default (usually `0.0`).
    #[must_use]
    pub fn value(&self) -> f32 {
        self.service.axis(&read(&self.shared.name))
    }

    /// Current unprocessed value of the bound axis.
    #[must_use]
    pub fn value_raw(&self) -> f32 {
        self.service.axis_raw(&read(&self.shared.name))
    }
}

impl<S: AxisChangeSource> Drop for AxisBinding<S> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<S: AxisChangeSource> std::fmt::Debug for AxisBinding<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxisBinding")
            .field("name", &self.name())
            .field("observers", &self.observer_count())
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}
