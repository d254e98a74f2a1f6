//! Annulus / casing interval records.

use serde::{Deserialize, Serialize};

/// One open-hole or cased interval with the string that runs through it,
/// ordered as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnulusSection {
    /// Interval label (e.g. "9 5/8\" casing × 5\" DP")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Hole or casing inner diameter (in)
    pub hole_id_in: f64,
    /// Outer diameter of the enclosed string (in)
    pub string_od_in: f64,
    /// Top of the interval (ft)
    pub top_depth_ft: f64,
    /// Bottom of the interval (ft); must be below the top
    pub bottom_depth_ft: f64,
}

/// A section echoed back with its derived figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionVolume {
    #[serde(flatten)]
    pub section: AnnulusSection,
    /// Interval length (ft)
    pub length_ft: f64,
    /// Annular capacity (bbl/ft)
    pub annular_capacity_bbl_ft: f64,
    /// Annular volume (bbl)
    pub annular_volume_bbl: f64,
    /// Strokes to displace this interval; 0 when no pump output was
    /// supplied
    pub strokes: u64,
}

/// Totals over all intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnularVolumeTotals {
    /// Total annular volume (bbl)
    pub total_annular_volume_bbl: f64,
    /// Strokes for a full annular displacement, computed from the total
    /// volume (not the sum of per-section stroke counts)
    pub total_strokes: u64,
}

/// Result of an annular-volume calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnularVolumeReport {
    pub sections: Vec<SectionVolume>,
    pub totals: AnnularVolumeTotals,
}
