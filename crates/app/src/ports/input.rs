//! Input-query port — read axis values by name.

use std::sync::Arc;

use axisbind_domain::axis::AxisName;

/// Reads the current value of named axes.
///
/// Lookups are expected to be case-insensitive. An axis the service does not
/// know reads as the service's neutral default, conventionally `0.0`; callers
/// must not treat that as an error.
pub trait AxisQuery {
    /// Current processed value (after dead zone, sensitivity, smoothing).
    fn axis(&self, name: &AxisName) -> f32;

    /// Current unprocessed value.
    fn axis_raw(&self, name: &AxisName) -> f32;
}

impl<T: AxisQuery + ?Sized> AxisQuery for Arc<T> {
    fn axis(&self, name: &AxisName) -> f32 {
        (**self).axis(name)
    }

    fn axis_raw(&self, name: &AxisName) -> f32 {
        (**self).axis_raw(name)
    }
}
