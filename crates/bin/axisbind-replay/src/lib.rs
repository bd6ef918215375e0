//! # axisbind-replay
//!
//! Composition root that wires the virtual input service to axis bindings.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Construct the [`VirtualInput`](axisbind_adapter_virtual::VirtualInput) adapter
//! - Construct one [`AxisBinding`](axisbind_app::AxisBinding) per configured axis
//! - Replay the configured samples on a fixed tick and log notifications
//! - Release every binding on completion or on Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

pub mod config;
pub mod replay;
