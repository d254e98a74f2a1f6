//! Kill-sheet input and result records.

use serde::{Deserialize, Serialize};

/// Shut-in readings and aggregate well volumes for a kill-sheet
/// calculation.
///
/// The aggregate volumes and pump output normally come from
/// [`calculate_string_volume`](crate::calculate_string_volume),
/// [`calculate_annular_volumes`](crate::calculate_annular_volumes), and
/// [`calculate_pump_output`](crate::calculate_pump_output), but any caller
/// supplying well-formed numbers is accepted; inputs are validated here
/// regardless of source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KillSheetInputs {
    /// Mud weight in the hole when shut in (ppg)
    pub current_mud_weight_ppg: f64,
    /// True vertical depth of the well (ft)
    pub tvd_ft: f64,
    /// Shut-in drillpipe pressure (psi)
    pub sidpp_psi: f64,
    /// Shut-in casing pressure (psi)
    pub sicp_psi: f64,
    /// Slow-circulating-rate friction pressure (psi)
    pub scr_psi: f64,
    /// Pit gain observed when the kick was taken (bbl)
    pub pit_gain_bbl: f64,
    /// True vertical depth of the casing shoe (ft)
    pub shoe_tvd_ft: f64,
    /// Leak-off-test equivalent mud weight at the shoe (ppg)
    pub lot_emw_ppg: f64,
    /// Total drill-string internal volume (bbl)
    pub string_volume_bbl: f64,
    /// Total annular volume (bbl)
    pub annular_volume_bbl: f64,
    /// Pump output (bbl/stroke)
    pub pump_output_bbl_stk: f64,
}

/// Kick severity classified from the kick gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KickIntensity {
    /// Gradient ≤ 0.30 psi/bbl
    Low,
    /// Gradient in (0.30, 0.45] psi/bbl
    #[serde(rename = "Medium (Oil/Water)")]
    MediumOilWater,
    /// Gradient > 0.45 psi/bbl
    #[serde(rename = "High (Gas)")]
    HighGas,
}

impl std::fmt::Display for KickIntensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KickIntensity::Low => write!(f, "Low"),
            KickIntensity::MediumOilWater => write!(f, "Medium (Oil/Water)"),
            KickIntensity::HighGas => write!(f, "High (Gas)"),
        }
    }
}

/// One row of the drillpipe pressure-decline schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureStep {
    /// Cumulative strokes pumped at this row, clamped to strokes-to-bit
    pub strokes: u64,
    /// Target drillpipe pressure (psi)
    pub drillpipe_pressure_psi: f64,
    /// Percent of the string displacement complete
    pub percent_complete: f64,
}

/// Complete kill sheet. All fields are derived and immutable; a fresh
/// report is produced per invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KillSheetReport {
    /// Formation pore pressure (psi)
    pub formation_pressure_psi: f64,
    /// Kill mud weight required to balance the formation (ppg)
    pub kill_mud_weight_ppg: f64,
    /// Initial circulating pressure (psi)
    pub icp_psi: f64,
    /// Final circulating pressure once kill mud reaches the bit (psi)
    pub fcp_psi: f64,
    /// Maximum allowable annular surface pressure (psi). Negative when the
    /// kill mud weight exceeds the leak-off equivalent. Surfaced, never
    /// clamped.
    pub maasp_psi: f64,
    /// Strokes for kill mud to reach the bit
    pub strokes_to_bit: u64,
    /// Strokes for a complete bottoms-up circulation
    pub strokes_bottoms_up: u64,
    /// Kill mud volume to mix (bbl)
    pub kill_mud_volume_bbl: f64,
    /// Kick gradient (psi/bbl); 0 when no pit gain was observed
    pub kick_gradient_psi_bbl: f64,
    /// Kick severity classification
    pub kick_intensity: KickIntensity,
    /// True when the shut-in casing pressure exceeds MAASP
    pub maasp_violation: bool,
    /// 21-point ICP→FCP drillpipe pressure schedule
    pub pressure_schedule: Vec<PressureStep>,
    /// Operator-facing warnings attached to an otherwise successful result
    pub warnings: Vec<String>,
}
