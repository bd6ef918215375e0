//! # axisbind-adapter-virtual
//!
//! Virtual input service that stores axis values pushed by its owner and
//! broadcasts a change whenever one of them actually changes.
//!
//! It performs no device polling and no filtering: the caller supplies both
//! the processed and the raw value of each sample. This makes it a stand-in
//! for an engine input system in tests, demos and replays.
//!
//! | Operation | Broadcast |
//! |-----------|-----------|
//! | [`VirtualInput::set_axis`] on a new axis | always |
//! | [`VirtualInput::set_axis`] with identical values | never |
//! | [`VirtualInput::remove_axis`] of a non-zero axis | yes, reads fall back to `0.0` |
//!
//! ## Dependency rule
//!
//! Depends on `axisbind-app` (port traits) and `axisbind-domain` only.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use axisbind_app::event_bus::AxisChangeBus;
use axisbind_app::ports::{AxisChangeSource, AxisChangedHandler, AxisQuery};
use axisbind_domain::axis::AxisName;
use axisbind_domain::error::InputError;
use axisbind_domain::event::AxisChanged;
use axisbind_domain::id::SubscriptionId;
use axisbind_domain::reading::AxisReading;

/// Value returned for axes the service does not know.
pub const NEUTRAL: f32 = 0.0;

/// Stored axis: the name as first registered plus its latest reading.
#[derive(Debug, Clone)]
struct Slot {
    name: AxisName,
    reading: AxisReading,
}

/// In-memory input service.
///
/// Axis lookups are case-insensitive. Broadcasts carry the name exactly as
/// passed to the mutating call.
#[derive(Debug, Default)]
pub struct VirtualInput {
    axes: Mutex<BTreeMap<String, Slot>>,
    bus: AxisChangeBus,
}

impl VirtualInput {
    /// Create a service with no axes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the processed and raw value of `name`.
    ///
    /// A change is broadcast when the axis is new or either value differs
    /// from the stored one. Returns whether a broadcast happened.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonFinite`] if either value is NaN or infinite;
    /// nothing is stored in that case.
    pub fn set_axis(
        &self,
        name: impl Into<AxisName>,
        value: f32,
        raw: f32,
    ) -> Result<bool, InputError> {
        let name = name.into();
        let reading = AxisReading::new(name.as_str(), value, raw)?;

        let changed = {
            let mut axes = self.axes();
            match axes.get_mut(&name.key()) {
                Some(slot) if !slot.reading.differs_from(&reading) => false,
                Some(slot) => {
                    slot.reading = reading;
                    true
                }
                None => {
                    axes.insert(
                        name.key(),
                        Slot {
                            name: name.clone(),
                            reading,
                        },
                    );
                    true
                }
            }
        };

        if changed {
            tracing::trace!(axis = %name, value, raw, "virtual axis updated");
            self.bus.publish(&AxisChanged::new(name));
        }
        Ok(changed)
    }

    /// Forget `name`. Subsequent reads return [`NEUTRAL`].
    ///
    /// A change is broadcast if the removed reading was not already neutral.
    pub fn remove_axis(&self, name: impl Into<AxisName>) -> Option<AxisReading> {
        let name = name.into();
        let removed = self.axes().remove(&name.key())?;

        if !removed.reading.is_neutral() {
            self.bus.publish(&AxisChanged::new(name));
        }
        Some(removed.reading)
    }

    /// Latest stored reading for `name`.
    #[must_use]
    pub fn reading(&self, name: &AxisName) -> Option<AxisReading> {
        self.axes().get(&name.key()).map(|slot| slot.reading)
    }

    /// Names of all known axes, as first registered, sorted case-insensitively.
    #[must_use]
    pub fn axis_names(&self) -> Vec<AxisName> {
        self.axes().values().map(|slot| slot.name.clone()).collect()
    }

    /// Number of handlers registered for change broadcasts.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.bus.subscriber_count()
    }

    fn axes(&self) -> MutexGuard<'_, BTreeMap<String, Slot>> {
        self.axes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AxisQuery for VirtualInput {
    fn axis(&self, name: &AxisName) -> f32 {
        self.reading(name).map_or(NEUTRAL, |reading| reading.value)
    }

    fn axis_raw(&self, name: &AxisName) -> f32 {
        self.reading(name).map_or(NEUTRAL, |reading| reading.raw)
    }
}

impl AxisChangeSource for VirtualInput {
    fn subscribe(&self, handler: AxisChangedHandler) -> SubscriptionId {
        self.bus.subscribe(handler)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axisbind_app::AxisBinding;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn recorder(input: &VirtualInput) -> Arc<Mutex<Vec<String>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        input.subscribe(Arc::new(move |event: &AxisChanged| {
            sink.lock().unwrap().push(event.axis.to_string());
        }));
        seen
    }

    #[test]
    fn should_read_neutral_for_unknown_axis() {
        let input = VirtualInput::new();
        let name = AxisName::from("Horizontal");
        assert!(input.axis(&name).abs() < f32::EPSILON);
        assert!(input.axis_raw(&name).abs() < f32::EPSILON);
        assert!(input.reading(&name).is_none());
    }

    #[test]
    fn should_store_values_case_insensitively() {
        let input = VirtualInput::new();
        input.set_axis("Horizontal", 0.5, 0.6).unwrap();

        let name = AxisName::from("HORIZONTAL");
        assert!((input.axis(&name) - 0.5).abs() < f32::EPSILON);
        assert!((input.axis_raw(&name) - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn should_broadcast_name_as_given() {
        let input = VirtualInput::new();
        let seen = recorder(&input);

        input.set_axis("Horizontal", 0.5, 0.5).unwrap();
        input.set_axis("horizontal", 0.7, 0.7).unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["Horizontal".to_string(), "horizontal".to_string()]
        );
    }

    #[test]
    fn should_not_broadcast_when_values_are_unchanged() {
        let input = VirtualInput::new();
        let seen = recorder(&input);

        assert!(input.set_axis("Vertical", 1.0, 1.0).unwrap());
        assert!(!input.set_axis("Vertical", 1.0, 1.0).unwrap());
        assert!(input.set_axis("Vertical", 1.0, 0.98).unwrap());

        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn should_reject_non_finite_values_without_storing() {
        let input = VirtualInput::new();
        let seen = recorder(&input);

        let err = input.set_axis("Vertical", f32::NAN, 0.0).unwrap_err();

        assert!(matches!(err, InputError::NonFinite { .. }));
        assert!(input.reading(&AxisName::from("Vertical")).is_none());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn should_broadcast_and_fall_back_to_neutral_on_removal() {
        let input = VirtualInput::new();
        input.set_axis("Throttle", 0.8, 0.8).unwrap();
        let seen = recorder(&input);

        let removed = input.remove_axis("throttle").unwrap();

        assert!((removed.value - 0.8).abs() < f32::EPSILON);
        assert!(input.axis(&AxisName::from("Throttle")).abs() < f32::EPSILON);
        assert_eq!(*seen.lock().unwrap(), vec!["throttle".to_string()]);
    }

    #[test]
    fn should_not_broadcast_when_removing_neutral_or_unknown_axis() {
        let input = VirtualInput::new();
        input.set_axis("Idle", 0.0, 0.0).unwrap();
        let seen = recorder(&input);

        assert!(input.remove_axis("Idle").is_some());
        assert!(input.remove_axis("Missing").is_none());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn should_list_axis_names_as_first_registered() {
        let input = VirtualInput::new();
        input.set_axis("Vertical", 0.1, 0.1).unwrap();
        input.set_axis("Horizontal", 0.1, 0.1).unwrap();
        input.set_axis("VERTICAL", 0.2, 0.2).unwrap();

        assert_eq!(
            input.axis_names(),
            vec![AxisName::from("Horizontal"), AxisName::from("Vertical")]
        );
    }

    #[test]
    fn should_drive_binding_end_to_end() {
        let input = Arc::new(VirtualInput::new());
        let mut binding = AxisBinding::with_name(Arc::clone(&input), "Mouse Y");
        let count = Arc::new(AtomicUsize::new(0));
        {
            let count = Arc::clone(&count);
            binding.on_value_changed(move || {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }

        input.set_axis("mouse y", -0.4, -0.45).unwrap();
        input.set_axis("mouse y", -0.4, -0.45).unwrap();
        input.set_axis("Mouse X", 1.0, 1.0).unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!((binding.value() + 0.4).abs() < f32::EPSILON);
        assert!((binding.value_raw() + 0.45).abs() < f32::EPSILON);

        binding.release();
        input.set_axis("Mouse Y", 0.0, 0.0).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(input.subscriber_count(), 0);
    }
}
