//! Mud-pump specification and output records.

use serde::{Deserialize, Serialize};

/// Mud-pump configuration.
///
/// Deserialization accepts any string for `pump_type`: a recognized duplex
/// marker selects [`PumpType::Duplex`]; anything else, typos included,
/// silently selects triplex. See [`PumpType::from_marker`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpSpec {
    /// Liner size (in)
    pub liner_size_in: f64,
    /// Stroke length (in)
    pub stroke_length_in: f64,
    /// Volumetric efficiency as a fraction in (0, 1]
    pub efficiency: f64,
    /// Pump type; decides the cylinder count
    pub pump_type: PumpType,
}

/// Pump cylinder arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PumpType {
    /// Three cylinders; the default for any unrecognized marker
    #[default]
    Triplex,
    /// Two cylinders
    Duplex,
}

impl PumpType {
    /// Number of pump cylinders.
    pub const fn cylinders(self) -> u32 {
        match self {
            PumpType::Triplex => 3,
            PumpType::Duplex => 2,
        }
    }

    /// Map a free-text marker onto a pump type.
    ///
    /// Only a case-insensitive "duplex" selects duplex; every other value
    /// falls back to triplex. The fallback is silent and changes the
    /// cylinder count from 2 to 3, so callers sending free text should
    /// validate upstream.
    pub fn from_marker(marker: &str) -> Self {
        if marker.eq_ignore_ascii_case("duplex") {
            PumpType::Duplex
        } else {
            PumpType::Triplex
        }
    }
}

impl From<String> for PumpType {
    fn from(marker: String) -> Self {
        PumpType::from_marker(&marker)
    }
}

impl std::fmt::Display for PumpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PumpType::Triplex => write!(f, "triplex"),
            PumpType::Duplex => write!(f, "duplex"),
        }
    }
}

/// Pump output at one pump rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpRateRow {
    /// Pump rate (strokes/min)
    pub spm: u32,
    /// Output (bbl/min)
    pub bbl_min: f64,
    /// Output (bbl/stroke)
    pub bbl_stk: f64,
    /// Output (gal/min)
    pub gal_min: f64,
    /// Output (L/min)
    pub l_min: f64,
}

/// Result of a pump-output calculation: the pump spec echoed back with
/// the resolved cylinder count, the per-stroke output, and the standard
/// rate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpOutputReport {
    #[serde(flatten)]
    pub spec: PumpSpec,
    /// Cylinder count resolved from the pump type
    pub cylinders: u32,
    /// Output per stroke (bbl/stk)
    pub per_stroke_bbl: f64,
    /// Outputs over the standard slow-pump rate range
    pub table: Vec<PumpRateRow>,
}
