#![deny(missing_docs)]

//! # fpcheck Models
//!
//! Core data types for the flight-plan rule-checking engine.
//!
//! A check turns one [`FlightPlan`] snapshot into exactly one [`Action`]:
//!
//! ```text
//! RawFlightPlan ──normalize()──▶ FlightPlan ──rule set──▶ Action
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`aircraft`] | Aircraft capability enumerations and the `Aircraft` record |
//! | [`flight_plan`] | `FlightRule`, the `FlightPlan` snapshot and derived fields |
//! | [`raw`] | `RawFlightPlan` — host-extracted codes and their normalization |
//! | [`action`] | `Severity` ordering and the `Action` check result |
//! | [`error`] | `ModelError` |
//!
//! Every enumeration that mirrors an open-ended host field carries an
//! explicit `Unknown` variant, so normalization of those fields is total.
//! Only the flight rule — a closed four-letter alphabet — can fail.

pub mod action;
pub mod aircraft;
pub mod error;
pub mod flight_plan;
pub mod raw;

// Re-export all public types at crate root for convenience.
// Downstream crates can use `fpcheck_models::FlightPlan` directly.
pub use action::*;
pub use aircraft::*;
pub use error::*;
pub use flight_plan::*;
pub use raw::*;
