//! # axisbind-app
//!
//! Application layer — the axis binding and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that input services must implement:
//!   - `AxisQuery` — read the processed and raw value of a named axis
//!   - `AxisChangeSource` — register for the "axis changed" broadcast
//! - Provide the **`AxisBinding`** handle: bind to an axis by name, proxy its
//!   readings, and forward matching change notifications to observers
//! - Provide **in-process infrastructure** (the synchronous change bus) that
//!   input-service adapters can reuse
//!
//! ## Dependency rule
//! Depends on `axisbind-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod binding;
pub mod event_bus;
pub mod ports;

mod sync;

pub use binding::AxisBinding;
pub use event_bus::AxisChangeBus;
