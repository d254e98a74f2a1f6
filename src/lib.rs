//! Well-control kill sheet and volumetrics calculation engine.
//!
//! Six pure operations over drilling-rig geometry and shut-in readings:
//!
//! - [`convert_unit`]: direct factor-table unit conversions
//! - [`calculate_string_volume`]: drill-string volume/displacement/strokes
//! - [`calculate_annular_volumes`]: annular volume/strokes per interval
//! - [`calculate_pump_output`]: pump output per stroke and per minute
//! - [`calculate_kill_sheet`]: the full kill-sheet formula chain
//! - [`track_displacement`]: fluid-front location during the kill
//!
//! Every operation is a synchronous function of its inputs: no shared
//! state, no I/O, no internal retries. Identical inputs yield identical
//! outputs, so calls are safe to run on any number of threads and safe for
//! callers to memoize. Failures are typed ([`CalcError`]) and name the
//! offending field; rounding is applied only when a report is assembled.
//!
//! Persistence of well/string/section records, authentication, and
//! transport are the caller's concern. [`scenario`] provides a TOML
//! file-based reference caller used by the `kill-sheet` binary.

pub mod constants;
pub mod error;
mod round;
pub mod scenario;
pub mod types;
pub mod units;
pub mod volumetrics;
pub mod well_control;

// Re-export the operation surface
pub use error::CalcError;
pub use scenario::{ScenarioError, WellScenario};
pub use units::{conversion_factor, convert_unit};
pub use volumetrics::{
    annular_capacity, calculate_annular_volumes, calculate_pump_output, calculate_string_volume,
    displacement_capacity, hydrostatic_pressure, pipe_capacity,
};
pub use well_control::{calculate_kill_sheet, classify_kick_intensity, track_displacement};

// Re-export the record types callers build requests from
pub use types::{
    AnnularVolumeReport, AnnularVolumeTotals, AnnulusSection, ComponentVolume,
    DisplacementInputs, DisplacementSnapshot, FluidFront, KickIntensity, KillSheetInputs,
    KillSheetReport, LegProgress, PipeComponent, PressureStep, PumpOutputReport, PumpRateRow,
    PumpSpec, PumpType, SectionVolume, StringVolumeReport, StringVolumeTotals,
};
