//! # fpcheck Engine
//!
//! The flight-plan rule-checking engine: an ordered set of independent
//! validation rules plus the reduction that turns their diagnostics into
//! exactly one displayable [`Action`](fpcheck_models::Action).
//!
//! * [`check`] — the [`Rule`] trait, the ordered [`RuleSet`] and the
//!   severity-max / first-registered reduction.
//! * [`rules`] — the built-in rule families (RVSM, equipment, SID
//!   altitude, route sanity, VFR altitude band).
//! * [`expr`] — the boolean condition language used by check profiles.
//! * [`profile`] — declarative, JSON-loaded aerodrome rule profiles.
//!
//! The engine is synchronous and side-effect-free: every rule is a pure
//! function of the flight-plan snapshot, and evaluation is total once a
//! plan has been normalized.

pub mod check;
pub mod expr;
pub mod profile;
pub mod rules;

pub use check::{Rule, RuleSet};
pub use expr::{EvalError, Expr, ParseError};
pub use profile::{Profile, ProfileError, ProfileRule};
