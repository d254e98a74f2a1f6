//! Displacement-tracking records.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Inputs for one displacement-tracking call: the advancing stroke counter
/// plus the static well parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplacementInputs {
    /// Cumulative strokes pumped since the kill started
    pub current_strokes: u64,
    /// Pump output (bbl/stroke)
    pub pump_output_bbl_stk: f64,
    /// Total drill-string internal volume (bbl)
    pub string_volume_bbl: f64,
    /// Total annular volume (bbl)
    pub annular_volume_bbl: f64,
    /// Kill rate (strokes/min); 0 suppresses the time estimate
    pub pump_rate_spm: f64,
}

/// Where the displacement front currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FluidFront {
    /// Kill mud is still inside the drill string
    InString,
    /// Kill mud has turned the bit and is displacing the annulus
    InAnnulus,
}

impl std::fmt::Display for FluidFront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FluidFront::InString => write!(f, "Drill String"),
            FluidFront::InAnnulus => write!(f, "Annulus"),
        }
    }
}

/// Progress through the leg (string or annulus) the front is currently in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegProgress {
    /// Percent of this leg displaced
    pub percent_complete: f64,
    /// Volume left in this leg (bbl)
    pub volume_remaining_bbl: f64,
    /// Strokes left in this leg
    pub strokes_remaining: u64,
}

/// Snapshot of a displacement in progress. Purely derived from the inputs;
/// each call yields an independent snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplacementSnapshot {
    /// Strokes pumped so far
    pub current_strokes: u64,
    /// Volume pumped so far (bbl)
    pub volume_pumped_bbl: f64,
    /// Total system volume, string + annulus (bbl)
    pub total_volume_bbl: f64,
    /// Percent of the total system displaced; exceeds 100 when pumping
    /// continues past a full circulation
    pub percent_complete: f64,
    /// Which leg the front is in
    pub front: FluidFront,
    /// Progress through the current leg
    pub leg: LegProgress,
    /// Strokes left to complete the circulation
    pub strokes_remaining: u64,
    /// Minutes left at the supplied pump rate; 0 when no rate was supplied
    pub minutes_remaining: u64,
}

impl DisplacementSnapshot {
    /// Projected completion time, counted from a caller-supplied clock
    /// reading. The engine never reads a clock itself.
    pub fn estimated_completion(&self, from: DateTime<Utc>) -> DateTime<Utc> {
        from + Duration::minutes(self.minutes_remaining as i64)
    }
}
