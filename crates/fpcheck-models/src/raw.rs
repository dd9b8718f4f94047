//! Field normalization from host-extracted raw codes.
//!
//! The host-plugin collaborator reads single-character and short-string
//! codes straight out of the host's flight-plan objects without
//! interpreting them. [`RawFlightPlan`] is that uninterpreted shape;
//! [`RawFlightPlan::normalize`] is the only fallible step between the
//! host and the rule engine.

use serde::{Deserialize, Serialize};

use crate::aircraft::{Aircraft, AircraftType, EngineType, FaaEquipmentCode, WakeCategory};
use crate::error::ModelError;
use crate::flight_plan::{FlightPlan, FlightRule};

// ---------------------------------------------------------------------------
// RawFlightPlan
// ---------------------------------------------------------------------------

/// A flight plan as extracted from the host, before normalization.
///
/// All fields default so that partially-filed plans can be represented;
/// a defaulted flight rule (`""`) fails normalization, which is the
/// intended behaviour — the flight rule is the one structurally required
/// field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RawFlightPlan {
    /// ICAO type-of-aircraft letter, e.g. `'L'`.
    pub aircraft_type: char,
    /// Wake-turbulence category letter.
    pub wake_category: char,
    /// FAA equipment suffix letter.
    pub equipment_code: char,
    /// Engine type letter.
    pub engine_type: char,
    /// Number of engines.
    pub engine_count: u8,
    /// RVSM certification flag.
    pub rvsm_capable: bool,
    /// Flight-rule code, one of `"V"`, `"I"`, `"Y"`, `"Z"`.
    pub flight_rule: String,
    /// Cleared altitude in feet, `0` when not yet cleared.
    pub cleared_altitude: u32,
    /// Filed (final) altitude in feet.
    pub filed_altitude: u32,
    /// Departure aerodrome.
    pub departure: String,
    /// Departure runway.
    pub departure_runway: String,
    /// Arrival aerodrome.
    pub arrival: String,
    /// SID name.
    pub sid: String,
    /// Route string.
    pub route: String,
}

impl RawFlightPlan {
    /// Normalize every raw code into its typed representation.
    ///
    /// The four aircraft alphabets are open-ended, so their mappings are
    /// total and degrade to `Unknown`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidFlightRule`] when the flight-rule
    /// code is outside `V`, `I`, `Y`, `Z` — the single condition under
    /// which a plan cannot be checked at all.
    pub fn normalize(&self) -> Result<FlightPlan, ModelError> {
        let aircraft = Aircraft {
            aircraft_type: AircraftType::from_code(self.aircraft_type),
            wake_category: WakeCategory::from_code(self.wake_category),
            equipment_code: FaaEquipmentCode::from_code(self.equipment_code),
            engine_type: EngineType::from_code(self.engine_type),
            engine_count: self.engine_count,
            rvsm_capable: self.rvsm_capable,
        };

        Ok(FlightPlan {
            aircraft,
            flight_rule: FlightRule::from_code(&self.flight_rule)?,
            cleared_altitude: self.cleared_altitude,
            filed_altitude: self.filed_altitude,
            departure: self.departure.clone(),
            departure_runway: self.departure_runway.clone(),
            arrival: self.arrival.clone(),
            sid: self.sid.clone(),
            route: self.route.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
