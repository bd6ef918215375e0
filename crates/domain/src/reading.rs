//! Axis reading — the processed and raw values of one axis.

use crate::error::InputError;

/// Snapshot of an axis as stored by an input service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisReading {
    /// Value after engine-side filtering (dead zone, smoothing, …).
    pub value: f32,
    /// Unprocessed value.
    pub raw: f32,
}

impl AxisReading {
    /// Build a reading from a processed and a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NonFinite`] if either value is NaN or infinite.
    pub fn new(axis: &str, value: f32, raw: f32) -> Result<Self, InputError> {
        for candidate in [value, raw] {
            if !candidate.is_finite() {
                return Err(InputError::NonFinite {
                    axis: axis.to_string(),
                    value: candidate,
                });
            }
        }
        Ok(Self { value, raw })
    }

    /// Whether either value differs from `other`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn differs_from(&self, other: &Self) -> bool {
        self.value != other.value || self.raw != other.raw
    }

    /// Whether both values are zero, i.e. indistinguishable from an unknown axis.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_neutral(&self) -> bool {
        self.value == 0.0 && self.raw == 0.0
    }
}
