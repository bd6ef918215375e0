//! # axisbind-domain
//!
//! Pure domain model for binding to named input axes.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **axis names** and their case-insensitive matching rule
//! - Define **axis change events** (the payload of the input service broadcast)
//! - Define **axis readings** (processed + raw value pairs)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod axis;
pub mod event;
pub mod reading;
