//! Kill-sheet calculation.

use crate::constants::{
    KICK_GRADIENT_GAS_THRESHOLD, KICK_GRADIENT_OIL_WATER_THRESHOLD, PSI_PER_FT_PER_PPG,
    SCHEDULE_STEPS,
};
use crate::error::CalcError;
use crate::round::round_to;
use crate::types::{KickIntensity, KillSheetInputs, KillSheetReport, PressureStep};
use crate::volumetrics::capacity::hydrostatic_pressure;

/// Warning attached to the report when shut-in casing pressure exceeds
/// MAASP. A flag for operator review, not an input error.
pub const MAASP_WARNING: &str =
    "WARNING: Annulus pressure exceeds MAASP. Risk of formation breakdown.";

/// Compute a complete kill sheet from shut-in readings and aggregate well
/// volumes.
///
/// The formula chain, in order:
///
/// 1. formation pressure = SIDPP + hydrostatic(current MW, TVD)
/// 2. kill mud weight    = current MW + SIDPP / 0.052 / TVD
/// 3. ICP                = SCR + SIDPP
/// 4. FCP                = SCR × (kill MW / current MW)
/// 5. MAASP              = (LOT EMW − kill MW) × 0.052 × shoe TVD
/// 6. strokes to bit     = ⌈string volume / pump output⌉
/// 7. strokes bottoms-up = ⌈(string + annular volume) / pump output⌉
/// 8. kill mud volume    = string + annular volume
/// 9. kick gradient      = (SICP − SIDPP) / pit gain, 0 when no pit gain
/// 10. kick intensity    = classification of the unrounded gradient
/// 11. pressure schedule = 21-point linear ICP→FCP decline
/// 12. MAASP violation   = SICP > MAASP
///
/// MAASP can come out negative when the kill mud weight exceeds the
/// leak-off equivalent; that is an alarming but valid result and is
/// surfaced as-is. Any precondition failure aborts the whole computation;
/// no partial report is ever returned.
pub fn calculate_kill_sheet(inputs: &KillSheetInputs) -> Result<KillSheetReport, CalcError> {
    validate_inputs(inputs)?;

    let formation_pressure = inputs.sidpp_psi
        + hydrostatic_pressure(inputs.current_mud_weight_ppg, inputs.tvd_ft);

    let kill_mud_weight =
        inputs.current_mud_weight_ppg + inputs.sidpp_psi / PSI_PER_FT_PER_PPG / inputs.tvd_ft;

    let icp = inputs.scr_psi + inputs.sidpp_psi;
    let fcp = inputs.scr_psi * (kill_mud_weight / inputs.current_mud_weight_ppg);

    let maasp = (inputs.lot_emw_ppg - kill_mud_weight) * PSI_PER_FT_PER_PPG * inputs.shoe_tvd_ft;

    let strokes_to_bit = (inputs.string_volume_bbl / inputs.pump_output_bbl_stk).ceil() as u64;
    let strokes_bottoms_up = ((inputs.string_volume_bbl + inputs.annular_volume_bbl)
        / inputs.pump_output_bbl_stk)
        .ceil() as u64;

    let kill_mud_volume = inputs.string_volume_bbl + inputs.annular_volume_bbl;

    // Zero pit gain is "no kick volume observed", not an error.
    let kick_gradient = if inputs.pit_gain_bbl > 0.0 {
        (inputs.sicp_psi - inputs.sidpp_psi) / inputs.pit_gain_bbl
    } else {
        0.0
    };
    let kick_intensity = classify_kick_intensity(kick_gradient);

    let pressure_schedule = pressure_schedule(icp, fcp, strokes_to_bit);

    let maasp_violation = inputs.sicp_psi > maasp;
    let mut warnings = Vec::new();
    if maasp_violation {
        tracing::warn!(
            sicp_psi = inputs.sicp_psi,
            maasp_psi = maasp,
            "shut-in casing pressure exceeds MAASP"
        );
        warnings.push(MAASP_WARNING.to_string());
    }

    Ok(KillSheetReport {
        formation_pressure_psi: round_to(formation_pressure, 0),
        kill_mud_weight_ppg: round_to(kill_mud_weight, 2),
        icp_psi: round_to(icp, 0),
        fcp_psi: round_to(fcp, 0),
        maasp_psi: round_to(maasp, 0),
        strokes_to_bit,
        strokes_bottoms_up,
        kill_mud_volume_bbl: round_to(kill_mud_volume, 2),
        kick_gradient_psi_bbl: round_to(kick_gradient, 3),
        kick_intensity,
        maasp_violation,
        pressure_schedule,
        warnings,
    })
}

/// Classify a kick gradient (psi/bbl) into an intensity bracket.
///
/// Thresholds are strict greater-than: a gradient exactly at a boundary
/// belongs to the lower bracket.
pub fn classify_kick_intensity(gradient_psi_bbl: f64) -> KickIntensity {
    if gradient_psi_bbl > KICK_GRADIENT_GAS_THRESHOLD {
        KickIntensity::HighGas
    } else if gradient_psi_bbl > KICK_GRADIENT_OIL_WATER_THRESHOLD {
        KickIntensity::MediumOilWater
    } else {
        KickIntensity::Low
    }
}

/// Build the 21-point drillpipe pressure-decline schedule.
///
/// Stroke counts advance by ⌈strokes-to-bit / 20⌉ and clamp at
/// strokes-to-bit, so the last rows can repeat the terminal stroke count
/// when the step was rounded up aggressively; the pressure column keeps
/// its linear ICP→FCP interpolation regardless. Known tail-flattening
/// artifact, preserved deliberately.
fn pressure_schedule(icp: f64, fcp: f64, strokes_to_bit: u64) -> Vec<PressureStep> {
    let stroke_step = strokes_to_bit.div_ceil(SCHEDULE_STEPS);
    let decrement = (icp - fcp) / SCHEDULE_STEPS as f64;

    (0..=SCHEDULE_STEPS)
        .map(|i| PressureStep {
            strokes: (i * stroke_step).min(strokes_to_bit),
            drillpipe_pressure_psi: round_to(icp - i as f64 * decrement, 0),
            percent_complete: round_to(i as f64 / SCHEDULE_STEPS as f64 * 100.0, 1),
        })
        .collect()
}

fn validate_inputs(inputs: &KillSheetInputs) -> Result<(), CalcError> {
    if inputs.current_mud_weight_ppg <= 0.0 {
        return Err(CalcError::DivisionByZero {
            field: "current_mud_weight_ppg",
            value: inputs.current_mud_weight_ppg,
        });
    }
    if inputs.tvd_ft <= 0.0 {
        return Err(CalcError::DivisionByZero {
            field: "tvd_ft",
            value: inputs.tvd_ft,
        });
    }
    if inputs.pump_output_bbl_stk <= 0.0 {
        return Err(CalcError::DivisionByZero {
            field: "pump_output_bbl_stk",
            value: inputs.pump_output_bbl_stk,
        });
    }
    if inputs.shoe_tvd_ft <= 0.0 {
        return Err(CalcError::InvalidInput {
            field: "shoe_tvd_ft",
            value: inputs.shoe_tvd_ft,
            reason: "must be positive",
        });
    }
    if inputs.lot_emw_ppg <= 0.0 {
        return Err(CalcError::InvalidInput {
            field: "lot_emw_ppg",
            value: inputs.lot_emw_ppg,
            reason: "must be positive",
        });
    }
    for (field, value) in [
        ("sidpp_psi", inputs.sidpp_psi),
        ("sicp_psi", inputs.sicp_psi),
        ("scr_psi", inputs.scr_psi),
        ("pit_gain_bbl", inputs.pit_gain_bbl),
        ("string_volume_bbl", inputs.string_volume_bbl),
        ("annular_volume_bbl", inputs.annular_volume_bbl),
    ] {
        if value < 0.0 {
            return Err(CalcError::InvalidInput {
                field,
                value,
                reason: "must not be negative",
            });
        }
    }
    Ok(())
}
