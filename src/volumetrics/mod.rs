//! Volumetrics: capacities, volumes, and pump output.
//!
//! Deterministic geometry arithmetic: no I/O, no state. Batch calculators
//! validate every element before computing anything, so a bad element
//! rejects the whole request and no partial result ever escapes.

pub mod annular_volume;
pub mod capacity;
pub mod pump_output;
pub mod string_volume;

pub use annular_volume::calculate_annular_volumes;
pub use capacity::{annular_capacity, displacement_capacity, hydrostatic_pressure, pipe_capacity};
pub use pump_output::calculate_pump_output;
pub use string_volume::calculate_string_volume;

/// Whole strokes needed to pump `volume_bbl`.
///
/// Partial strokes count as a full stroke; a pump stroke cannot be
/// fractional. An absent or non-positive pump output yields 0, the
/// documented "not applicable" state, not an error.
pub(crate) fn strokes_for(volume_bbl: f64, pump_output_bbl_stk: Option<f64>) -> u64 {
    match pump_output_bbl_stk {
        Some(output) if output > 0.0 => (volume_bbl / output).ceil() as u64,
        _ => 0,
    }
}
