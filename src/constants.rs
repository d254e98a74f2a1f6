//! Oilfield calculation constants.
//!
//! Every fixed factor used by the calculators lives here so the numbers are
//! auditable in one place. Grouped by subsystem for easy discovery.

// ============================================================================
// Capacity & Hydrostatics
// ============================================================================

/// Converts in² of circular cross-section to bbl/ft.
///
/// `capacity = d² / 1029.4`. The 1029.4 folds together π/4, the in²→ft²
/// conversion, and ft³→bbl (5.6146 ft³/bbl).
pub const CAPACITY_DIVISOR: f64 = 1029.4;

/// Pressure gradient of one ppg of mud weight (psi per ft of TVD).
///
/// `hydrostatic = mw_ppg × 0.052 × tvd_ft`.
pub const PSI_PER_FT_PER_PPG: f64 = 0.052;

// ============================================================================
// Pump Output
// ============================================================================

/// Divisor in the per-stroke pump output formula.
///
/// `output = liner² × stroke_length × cylinders × efficiency / 294` (bbl/stk).
/// The 294 folds π/4 and the in³→bbl conversion (9 702 in³/bbl).
pub const PUMP_OUTPUT_DIVISOR: f64 = 294.0;

/// Standard slow-pump rates tabulated by the pump output calculator (SPM).
pub const STANDARD_PUMP_RATES_SPM: [u32; 9] = [20, 30, 40, 50, 60, 70, 80, 90, 100];

/// US gallons per barrel.
pub const GAL_PER_BBL: f64 = 42.0;

/// Litres per barrel (oilfield rounding of 158.987).
pub const L_PER_BBL: f64 = 159.0;

// ============================================================================
// Kick Classification
// ============================================================================

/// Kick gradient (psi/bbl) above which the influx is classified as gas.
///
/// Strictly greater-than: a gradient of exactly 0.45 is still oil/water.
pub const KICK_GRADIENT_GAS_THRESHOLD: f64 = 0.45;

/// Kick gradient (psi/bbl) above which the influx is classified as
/// oil/water rather than a low-severity influx.
///
/// Strictly greater-than: a gradient of exactly 0.30 is still low.
pub const KICK_GRADIENT_OIL_WATER_THRESHOLD: f64 = 0.30;

// ============================================================================
// Pressure-Decline Schedule
// ============================================================================

/// Number of intervals in the drillpipe pressure-decline schedule.
///
/// The schedule has `SCHEDULE_STEPS + 1` rows, inclusive of both the ICP
/// row (0 strokes) and the FCP row (strokes to bit).
pub const SCHEDULE_STEPS: u64 = 20;
