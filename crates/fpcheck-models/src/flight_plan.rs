//! The flight-plan snapshot checked by the rule engine.
//!
//! [`FlightPlan`] is a plain value: it is rebuilt from the host's current
//! data for every check and dropped immediately after. Nothing in this
//! crate caches or keys on it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aircraft::Aircraft;
use crate::error::ModelError;

// ---------------------------------------------------------------------------
// FlightRule
// ---------------------------------------------------------------------------

/// The filed flight rule.
///
/// Unlike the aircraft capability fields this is a **closed** alphabet:
/// there is no `Unknown` variant, and [`FlightRule::from_code`] rejects
/// anything outside `V`, `I`, `Y`, `Z` (case-sensitive). Every downstream
/// rule assumes a valid flight rule, so an unreadable one makes the whole
/// plan uncheckable.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlightRule {
    /// Visual flight rules (`V`).
    #[default]
    Vfr,
    /// Instrument flight rules (`I`).
    Ifr,
    /// IFR first, cancelling to VFR en-route (`Y`).
    Yankee,
    /// VFR first, picking up IFR en-route (`Z`).
    Zulu,
}

impl FlightRule {
    /// Normalize a raw flight-rule code.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidFlightRule`] carrying the raw value
    /// for any input outside the closed set.
    pub fn from_code(code: &str) -> Result<Self, ModelError> {
        match code {
            "V" => Ok(FlightRule::Vfr),
            "I" => Ok(FlightRule::Ifr),
            "Y" => Ok(FlightRule::Yankee),
            "Z" => Ok(FlightRule::Zulu),
            other => Err(ModelError::InvalidFlightRule {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for FlightRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            FlightRule::Vfr => "V",
            FlightRule::Ifr => "I",
            FlightRule::Yankee => "Y",
            FlightRule::Zulu => "Z",
        };
        f.write_str(code)
    }
}

// ---------------------------------------------------------------------------
// FlightPlan
// ---------------------------------------------------------------------------

/// One normalized flight-plan snapshot — the engine's sole input.
///
/// All altitudes are in feet. A `cleared_altitude` of `0` means no
/// clearance has been issued yet. The free-text fields may legitimately
/// be empty for VFR or partially-filed plans.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct FlightPlan {
    /// Aircraft capability snapshot.
    pub aircraft: Aircraft,
    /// Filed flight rule.
    pub flight_rule: FlightRule,
    /// Currently assigned altitude in feet, `0` when not yet cleared.
    pub cleared_altitude: u32,
    /// Requested (final) cruise altitude in feet.
    pub filed_altitude: u32,
    /// Departure aerodrome, e.g. `"EDDF"`.
    pub departure: String,
    /// Assigned departure runway, e.g. `"18"`.
    pub departure_runway: String,
    /// Arrival aerodrome.
    pub arrival: String,
    /// Standard Instrument Departure name, e.g. `"CINDY4S"`.
    pub sid: String,
    /// Filed route string.
    pub route: String,
}

impl FlightPlan {
    /// The altitude a rule should judge: the cleared altitude once one is
    /// assigned, otherwise the filed altitude.
    pub fn effective_altitude(&self) -> u32 {
        if self.cleared_altitude > 0 {
            self.cleared_altitude
        } else {
            self.filed_altitude
        }
    }

    /// The SID's base waypoint — the name with the numeric designator and
    /// anything after it stripped (`"CINDY4S"` → `"CINDY"`).
    ///
    /// Empty when no SID is assigned.
    pub fn sid_waypoint(&self) -> &str {
        self.sid
            .split(|c: char| c.is_ascii_digit())
            .next()
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_rule_closed_alphabet() {
        assert_eq!(FlightRule::from_code("V"), Ok(FlightRule::Vfr));
        assert_eq!(FlightRule::from_code("I"), Ok(FlightRule::Ifr));
        assert_eq!(FlightRule::from_code("Y"), Ok(FlightRule::Yankee));
        assert_eq!(FlightRule::from_code("Z"), Ok(FlightRule::Zulu));
    }

    #[test]
    fn flight_rule_rejects_everything_else() {
        for bad in ["X", "v", "i", "", "VFR", "IY"] {
            assert_eq!(
                FlightRule::from_code(bad),
                Err(ModelError::InvalidFlightRule { value: bad.into() }),
                "code {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn flight_rule_display_matches_code() {
        for code in ["V", "I", "Y", "Z"] {
            assert_eq!(FlightRule::from_code(code).unwrap().to_string(), code);
        }
    }

    #[test]
    fn effective_altitude_prefers_clearance() {
        let fp = FlightPlan {
            cleared_altitude: 5000,
            filed_altitude: 35000,
            ..FlightPlan::default()
        };
        assert_eq!(fp.effective_altitude(), 5000);
    }

    #[test]
    fn effective_altitude_falls_back_to_filed() {
        let fp = FlightPlan {
            cleared_altitude: 0,
            filed_altitude: 35000,
            ..FlightPlan::default()
        };
        assert_eq!(fp.effective_altitude(), 35000);
    }

    #[test]
    fn sid_waypoint_strips_designator() {
        let fp = FlightPlan {
            sid: "CINDY4S".into(),
            ..FlightPlan::default()
        };
        assert_eq!(fp.sid_waypoint(), "CINDY");

        let fp = FlightPlan {
            sid: "TOBAK7M".into(),
            ..FlightPlan::default()
        };
        assert_eq!(fp.sid_waypoint(), "TOBAK");
    }

    #[test]
    fn sid_waypoint_empty_sid() {
        assert_eq!(FlightPlan::default().sid_waypoint(), "");
    }

    #[test]
    fn default_plan_is_vfr_and_empty() {
        let fp = FlightPlan::default();
        assert_eq!(fp.flight_rule, FlightRule::Vfr);
        assert_eq!(fp.effective_altitude(), 0);
        assert!(fp.route.is_empty());
    }
}
