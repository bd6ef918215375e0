//! Axis change event — broadcast by an input service whenever any axis
//! value changes.

use crate::axis::AxisName;

/// Notification that the value of the named axis changed.
///
/// The payload carries only the name; listeners query the service for the
/// new value if they need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisChanged {
    pub axis: AxisName,
}

impl AxisChanged {
    /// Build a change notification for `axis`.
    #[must_use]
    pub fn new(axis: impl Into<AxisName>) -> Self {
        Self { axis: axis.into() }
    }

    /// Whether this notification concerns `name` (case-insensitive).
    #[must_use]
    pub fn concerns(&self, name: &AxisName) -> bool {
        name.matches(self.axis.as_str())
    }
}
