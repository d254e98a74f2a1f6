//! Well scenario files.
//!
//! A scenario TOML bundles everything one kill-sheet run needs: the
//! shut-in readings, the drill string, the annulus geometry, and the pump.
//! It is the reference caller for the engine, the stand-in for whatever
//! persistence service supplies these records in production. The engine
//! re-validates every number regardless of source.
//!
//! ```toml
//! [well]
//! name = "Endeavour-7"
//!
//! [kick]
//! current_mud_weight_ppg = 10.0
//! tvd_ft = 10000.0
//! sidpp_psi = 500.0
//! sicp_psi = 600.0
//! scr_psi = 800.0
//! pit_gain_bbl = 20.0
//! shoe_tvd_ft = 5000.0
//! lot_emw_ppg = 14.0
//!
//! [[string]]
//! name = "5\" DP"
//! od_in = 5.0
//! id_in = 4.276
//! length_ft = 9600.0
//!
//! [[annulus]]
//! hole_id_in = 8.5
//! string_od_in = 5.0
//! top_depth_ft = 0.0
//! bottom_depth_ft = 10000.0
//!
//! [pump]
//! liner_size_in = 6.0
//! stroke_length_in = 12.0
//! efficiency = 0.95
//! pump_type = "triplex"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::types::{AnnulusSection, KillSheetInputs, PipeComponent, PumpSpec};

/// Default planned kill rate when the scenario does not name one (SPM).
const DEFAULT_KILL_RATE_SPM: f64 = 30.0;

/// Errors loading a scenario file. File failures are not calculation
/// errors, so they carry their own type.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Well identification, informational only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WellInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub rig: String,
}

/// Shut-in readings taken when the kick was recognized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KickReadings {
    /// Mud weight in the hole (ppg)
    pub current_mud_weight_ppg: f64,
    /// True vertical depth (ft)
    pub tvd_ft: f64,
    /// Shut-in drillpipe pressure (psi)
    pub sidpp_psi: f64,
    /// Shut-in casing pressure (psi)
    pub sicp_psi: f64,
    /// Slow-circulating-rate pressure (psi)
    pub scr_psi: f64,
    /// Observed pit gain (bbl)
    pub pit_gain_bbl: f64,
    /// Casing shoe TVD (ft)
    pub shoe_tvd_ft: f64,
    /// Leak-off-test equivalent mud weight (ppg)
    pub lot_emw_ppg: f64,
}

/// One complete kill-sheet scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellScenario {
    /// Well identification
    #[serde(default)]
    pub well: WellInfo,
    /// Shut-in readings
    pub kick: KickReadings,
    /// Drill string, bit up
    pub string: Vec<PipeComponent>,
    /// Annulus intervals
    pub annulus: Vec<AnnulusSection>,
    /// Mud pump
    pub pump: PumpSpec,
    /// Planned kill rate (SPM)
    #[serde(default = "default_kill_rate")]
    pub kill_rate_spm: f64,
}

fn default_kill_rate() -> f64 {
    DEFAULT_KILL_RATE_SPM
}

impl WellScenario {
    /// Load a scenario from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario: WellScenario =
            toml::from_str(&raw).map_err(|source| ScenarioError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        info!(
            well = %scenario.well.name,
            components = scenario.string.len(),
            sections = scenario.annulus.len(),
            "loaded well scenario"
        );
        Ok(scenario)
    }

    /// Assemble kill-sheet inputs from the shut-in readings plus the
    /// aggregate volumes and pump output computed by the calculators.
    pub fn kill_sheet_inputs(
        &self,
        string_volume_bbl: f64,
        annular_volume_bbl: f64,
        pump_output_bbl_stk: f64,
    ) -> KillSheetInputs {
        KillSheetInputs {
            current_mud_weight_ppg: self.kick.current_mud_weight_ppg,
            tvd_ft: self.kick.tvd_ft,
            sidpp_psi: self.kick.sidpp_psi,
            sicp_psi: self.kick.sicp_psi,
            scr_psi: self.kick.scr_psi,
            pit_gain_bbl: self.kick.pit_gain_bbl,
            shoe_tvd_ft: self.kick.shoe_tvd_ft,
            lot_emw_ppg: self.kick.lot_emw_ppg,
            string_volume_bbl,
            annular_volume_bbl,
            pump_output_bbl_stk,
        }
    }
}
