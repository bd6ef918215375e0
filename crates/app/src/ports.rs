//! Port definitions — traits that input services implement.
//!
//! The input service (device polling, axis mappings, dead zones, …) lives
//! outside this workspace. These traits are the only things the binding
//! needs from it, so any engine backend or test double can be plugged in.

pub mod axis_events;
pub mod input;

pub use axis_events::{AxisChangeSource, AxisChangedHandler};
pub use input::AxisQuery;
