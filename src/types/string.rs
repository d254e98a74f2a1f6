//! Drill-string component records.

use serde::{Deserialize, Serialize};

/// One element of the drill string, ordered bit-up as supplied by the
/// caller (slice order is the component's position).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeComponent {
    /// Component type / name, free text (e.g. "5\" 19.5# DP", "8\" DC")
    pub name: String,
    /// Outer diameter (in)
    pub od_in: f64,
    /// Inner diameter (in)
    pub id_in: f64,
    /// Measured length (ft)
    pub length_ft: f64,
    /// Steel grade (e.g. "S-135")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    /// Connection type (e.g. "NC50")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
}

/// A component echoed back with its derived figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentVolume {
    #[serde(flatten)]
    pub component: PipeComponent,
    /// Internal capacity (bbl/ft)
    pub capacity_bbl_ft: f64,
    /// Internal volume (bbl)
    pub volume_bbl: f64,
    /// Closed-end steel displacement (bbl)
    pub displacement_bbl: f64,
}

/// Totals over the whole string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringVolumeTotals {
    /// Total string length (ft)
    pub total_length_ft: f64,
    /// Total internal volume (bbl)
    pub total_volume_bbl: f64,
    /// Total steel displacement (bbl)
    pub total_displacement_bbl: f64,
    /// Strokes to displace the string volume; 0 when no pump output was
    /// supplied
    pub total_strokes: u64,
}

/// Result of a string-volume calculation: per-component figures in input
/// order plus running totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringVolumeReport {
    pub components: Vec<ComponentVolume>,
    pub totals: StringVolumeTotals,
}
