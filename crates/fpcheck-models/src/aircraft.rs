//! Aircraft capability types.
//!
//! Each enumeration mirrors a single-character field of the host's
//! flight-plan data. The host value space is open-ended (free-text entry
//! by pilots and dispatchers), so every enumeration carries an `Unknown`
//! variant and its `from_code` constructor is total — malformed input
//! degrades, it never aborts a check.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AircraftType
// ---------------------------------------------------------------------------

/// The basic aircraft category, from the ICAO type-of-aircraft letter.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
pub enum AircraftType {
    /// Conventional fixed-wing landplane (`L`).
    #[strum(serialize = "L")]
    Landplane,
    /// Seaplane (`S`).
    #[strum(serialize = "S")]
    Seaplane,
    /// Amphibian (`A`).
    #[strum(serialize = "A")]
    Amphibian,
    /// Helicopter (`H`).
    #[strum(serialize = "H")]
    Helicopter,
    /// Gyrocopter (`G`).
    #[strum(serialize = "G")]
    Gyrocopter,
    /// Tilt-wing aircraft (`T`).
    #[strum(serialize = "T")]
    TiltWing,
    /// Any code outside the known alphabet.
    #[strum(serialize = "?")]
    Unknown,
}

impl AircraftType {
    /// Map a raw host code to an aircraft type. Total — unrecognized
    /// codes become [`AircraftType::Unknown`].
    pub fn from_code(code: char) -> Self {
        match code {
            'L' => AircraftType::Landplane,
            'S' => AircraftType::Seaplane,
            'A' => AircraftType::Amphibian,
            'H' => AircraftType::Helicopter,
            'G' => AircraftType::Gyrocopter,
            'T' => AircraftType::TiltWing,
            _ => AircraftType::Unknown,
        }
    }
}

// ---------------------------------------------------------------------------
// WakeCategory
// ---------------------------------------------------------------------------

/// ICAO wake-turbulence category.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
pub enum WakeCategory {
    /// Light (`L`) — MTOW up to 7 t.
    #[strum(serialize = "L")]
    Light,
    /// Medium (`M`).
    #[strum(serialize = "M")]
    Medium,
    /// Heavy (`H`).
    #[strum(serialize = "H")]
    Heavy,
    /// Super (`J`) — A380 class.
    #[strum(serialize = "J")]
    Super,
    /// Any code outside the known alphabet.
    #[strum(serialize = "?")]
    Unknown,
}

impl WakeCategory {
    /// Map a raw host code to a wake category. Total.
    pub fn from_code(code: char) -> Self {
        match code {
            'L' => WakeCategory::Light,
            'M' => WakeCategory::Medium,
            'H' => WakeCategory::Heavy,
            'J' => WakeCategory::Super,
            _ => WakeCategory::Unknown,
        }
    }
}

// ---------------------------------------------------------------------------
// FaaEquipmentCode
// ---------------------------------------------------------------------------

/// FAA navigation/transponder equipment suffix.
///
/// The letter encodes the combination of transponder, DME, RNAV and RVSM
/// capability filed for the flight.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
#[allow(missing_docs)] // The variants are the FAA suffix letters themselves.
pub enum FaaEquipmentCode {
    T,
    X,
    U,
    D,
    B,
    A,
    M,
    N,
    P,
    Y,
    C,
    I,
    E,
    F,
    G,
    R,
    W,
    Q,
    /// Any code outside the known alphabet.
    #[strum(serialize = "?")]
    Unknown,
}

impl FaaEquipmentCode {
    /// Map a raw host code to an equipment suffix. Total.
    pub fn from_code(code: char) -> Self {
        match code {
            'T' => FaaEquipmentCode::T,
            'X' => FaaEquipmentCode::X,
            'U' => FaaEquipmentCode::U,
            'D' => FaaEquipmentCode::D,
            'B' => FaaEquipmentCode::B,
            'A' => FaaEquipmentCode::A,
            'M' => FaaEquipmentCode::M,
            'N' => FaaEquipmentCode::N,
            'P' => FaaEquipmentCode::P,
            'Y' => FaaEquipmentCode::Y,
            'C' => FaaEquipmentCode::C,
            'I' => FaaEquipmentCode::I,
            'E' => FaaEquipmentCode::E,
            'F' => FaaEquipmentCode::F,
            'G' => FaaEquipmentCode::G,
            'R' => FaaEquipmentCode::R,
            'W' => FaaEquipmentCode::W,
            'Q' => FaaEquipmentCode::Q,
            _ => FaaEquipmentCode::Unknown,
        }
    }

    /// Whether the filed equipment includes area-navigation capability
    /// (`E`, `F`, `G`, `R`, `Q` suffixes).
    pub fn is_rnav_capable(self) -> bool {
        matches!(
            self,
            FaaEquipmentCode::E
                | FaaEquipmentCode::F
                | FaaEquipmentCode::G
                | FaaEquipmentCode::R
                | FaaEquipmentCode::Q
        )
    }
}

// ---------------------------------------------------------------------------
// EngineType
// ---------------------------------------------------------------------------

/// Engine type letter from the flight-plan aircraft data.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
pub enum EngineType {
    /// Piston (`P`).
    #[strum(serialize = "P")]
    Piston,
    /// Turboprop (`T`).
    #[strum(serialize = "T")]
    Turboprop,
    /// Jet (`J`).
    #[strum(serialize = "J")]
    Jet,
    /// Electric (`E`).
    #[strum(serialize = "E")]
    Electric,
    /// Any code outside the known alphabet.
    #[strum(serialize = "?")]
    Unknown,
}

impl EngineType {
    /// Map a raw host code to an engine type. Total.
    pub fn from_code(code: char) -> Self {
        match code {
            'P' => EngineType::Piston,
            'T' => EngineType::Turboprop,
            'J' => EngineType::Jet,
            'E' => EngineType::Electric,
            _ => EngineType::Unknown,
        }
    }
}

// ---------------------------------------------------------------------------
// Aircraft
// ---------------------------------------------------------------------------

/// The aircraft capability snapshot embedded in a [`crate::FlightPlan`].
///
/// A value type with no independent identity — rebuilt from the host's
/// current data on every check.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Aircraft {
    /// Basic aircraft category.
    pub aircraft_type: AircraftType,
    /// Wake-turbulence category.
    pub wake_category: WakeCategory,
    /// FAA equipment suffix.
    pub equipment_code: FaaEquipmentCode,
    /// Engine type.
    pub engine_type: EngineType,
    /// Number of engines. Zero means the field was not filed.
    pub engine_count: u8,
    /// Whether the aircraft is RVSM certified.
    pub rvsm_capable: bool,
}

impl Default for Aircraft {
    /// An all-`Unknown` aircraft. Absence of information is a valid,
    /// checkable state, not an error.
    fn default() -> Self {
        Self {
            aircraft_type: AircraftType::Unknown,
            wake_category: WakeCategory::Unknown,
            equipment_code: FaaEquipmentCode::Unknown,
            engine_type: EngineType::Unknown,
            engine_count: 0,
            rvsm_capable: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
