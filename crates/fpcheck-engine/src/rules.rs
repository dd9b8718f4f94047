//! Built-in rule families.
//!
//! The thresholds here are domain configuration, not engine contract:
//! each rule documents its shape, and the constants pick the commonly
//! used bands. All messages fit the 15-character tag budget.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use fpcheck_models::{Action, FlightPlan, FlightRule, Severity};

use crate::check::Rule;

/// The RVSM altitude band, FL290–FL410, in feet.
pub const RVSM_BAND: RangeInclusive<u32> = 29_000..=41_000;

/// FL240 — at and above, IFR traffic is expected to carry RNAV equipment.
pub const EQUIPMENT_FLOOR: u32 = 24_000;

/// FL180 — base of the IFR-only altitude band.
pub const IFR_ONLY_FLOOR: u32 = 18_000;

// ---------------------------------------------------------------------------
// RvsmRule
// ---------------------------------------------------------------------------

/// Error when the plan is inside the RVSM band without RVSM certification.
///
/// Judges the cleared altitude once one is assigned, otherwise the filed
/// altitude.
pub struct RvsmRule;

impl Rule for RvsmRule {
    fn name(&self) -> &str {
        "rvsm"
    }

    fn check(&self, plan: &FlightPlan) -> Option<Action> {
        if RVSM_BAND.contains(&plan.effective_altitude()) && !plan.aircraft.rvsm_capable {
            return Some(Action::new(Severity::Error, "RVSM"));
        }
        None
    }
}

// ---------------------------------------------------------------------------
// EquipmentRule
// ---------------------------------------------------------------------------

/// Warning when an IFR plan is filed at an altitude requiring RNAV but the
/// equipment code is unknown or not RNAV capable.
pub struct EquipmentRule;

impl Rule for EquipmentRule {
    fn name(&self) -> &str {
        "equipment"
    }

    fn check(&self, plan: &FlightPlan) -> Option<Action> {
        if plan.flight_rule == FlightRule::Ifr
            && plan.filed_altitude >= EQUIPMENT_FLOOR
            && !plan.aircraft.equipment_code.is_rnav_capable()
        {
            return Some(Action::new(Severity::Warning, "EQPT"));
        }
        None
    }
}

// ---------------------------------------------------------------------------
// SidAltitudeRule
// ---------------------------------------------------------------------------

/// Warning when the cleared altitude is below the minimum published for
/// the assigned SID.
///
/// The SID table is domain data owned outside the per-call path: it is
/// loaded once, keyed by the SID's base waypoint, and only read during
/// evaluation. The default table is empty, so the rule never fires until
/// minima are supplied.
#[derive(Default)]
pub struct SidAltitudeRule {
    minima: HashMap<String, u32>,
}

impl SidAltitudeRule {
    /// Build the rule from a waypoint → minimum-initial-climb table
    /// (altitudes in feet).
    pub fn new(minima: HashMap<String, u32>) -> Self {
        Self { minima }
    }
}

impl Rule for SidAltitudeRule {
    fn name(&self) -> &str {
        "sid-altitude"
    }

    fn check(&self, plan: &FlightPlan) -> Option<Action> {
        if plan.sid.is_empty() || plan.cleared_altitude == 0 {
            return None;
        }
        let minimum = self.minima.get(plan.sid_waypoint())?;
        if plan.cleared_altitude < *minimum {
            return Some(Action::new(Severity::Warning, "SID ALT"));
        }
        None
    }
}

// ---------------------------------------------------------------------------
// RouteRule
// ---------------------------------------------------------------------------

/// Info when an IFR plan has an empty route.
pub struct RouteRule;

impl Rule for RouteRule {
    fn name(&self) -> &str {
        "route"
    }

    fn check(&self, plan: &FlightPlan) -> Option<Action> {
        if plan.flight_rule == FlightRule::Ifr && plan.route.trim().is_empty() {
            return Some(Action::new(Severity::Info, "RTE"));
        }
        None
    }
}

// ---------------------------------------------------------------------------
// VfrAltitudeRule
// ---------------------------------------------------------------------------

/// Error when a VFR plan files into the IFR-only band.
pub struct VfrAltitudeRule;

impl Rule for VfrAltitudeRule {
    fn name(&self) -> &str {
        "vfr-altitude"
    }

    fn check(&self, plan: &FlightPlan) -> Option<Action> {
        if plan.flight_rule == FlightRule::Vfr && plan.filed_altitude >= IFR_ONLY_FLOOR {
            return Some(Action::new(Severity::Error, "VFR RFL"));
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
