//! Output-boundary rounding.
//!
//! Calculations run at full f64 precision end to end; rounding is applied
//! exactly once, when a report struct is assembled. Rounds half away from
//! zero, matching the reporting convention of the surrounding tooling.

/// Round `value` to `decimals` decimal places.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
