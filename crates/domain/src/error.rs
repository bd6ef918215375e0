//! Common error types used across the workspace.
//!
//! Binding to an axis never fails: an unknown axis reads as the service's
//! neutral default. Errors only arise when feeding values into an input
//! service.

/// Errors raised by input services when accepting axis values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// A NaN or infinite value was supplied for an axis.
    #[error("axis {axis:?} received a non-finite value ({value})")]
    NonFinite { axis: String, value: f32 },
}
