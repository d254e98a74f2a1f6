//! Displacement tracking during a kill circulation.

use crate::error::CalcError;
use crate::round::round_to;
use crate::types::{DisplacementInputs, DisplacementSnapshot, FluidFront, LegProgress};

/// Locate the kill-mud front and the work remaining after
/// `current_strokes` strokes.
///
/// The front is in the string while the pumped volume is strictly less
/// than the string volume; at exact equality the front has just turned the
/// bit, so the snapshot reports the annulus leg at 0%, never the string
/// leg at 100%.
///
/// Remaining volumes and stroke counts clamp at 0 once pumping passes the
/// leg or system volume; the overall percent-complete is left uncapped so
/// over-displacement stays visible.
pub fn track_displacement(inputs: &DisplacementInputs) -> Result<DisplacementSnapshot, CalcError> {
    validate_inputs(inputs)?;

    let pump_output = inputs.pump_output_bbl_stk;
    let volume_pumped = inputs.current_strokes as f64 * pump_output;
    let total_volume = inputs.string_volume_bbl + inputs.annular_volume_bbl;
    let percent_complete = volume_pumped / total_volume * 100.0;

    let (front, leg) = if volume_pumped < inputs.string_volume_bbl {
        let remaining = inputs.string_volume_bbl - volume_pumped;
        (
            FluidFront::InString,
            LegProgress {
                percent_complete: round_to(volume_pumped / inputs.string_volume_bbl * 100.0, 1),
                volume_remaining_bbl: round_to(remaining, 2),
                strokes_remaining: (remaining / pump_output).ceil() as u64,
            },
        )
    } else {
        let annulus_pumped = volume_pumped - inputs.string_volume_bbl;
        let remaining = (inputs.annular_volume_bbl - annulus_pumped).max(0.0);
        let percent = if inputs.annular_volume_bbl > 0.0 {
            annulus_pumped / inputs.annular_volume_bbl * 100.0
        } else {
            // No annulus to displace: the leg is trivially complete.
            100.0
        };
        (
            FluidFront::InAnnulus,
            LegProgress {
                percent_complete: round_to(percent, 1),
                volume_remaining_bbl: round_to(remaining, 2),
                strokes_remaining: (remaining / pump_output).ceil() as u64,
            },
        )
    };

    let strokes_remaining = ((total_volume - volume_pumped).max(0.0) / pump_output).ceil() as u64;
    let minutes_remaining = if inputs.pump_rate_spm > 0.0 {
        (strokes_remaining as f64 / inputs.pump_rate_spm).ceil() as u64
    } else {
        // No pump rate supplied: time estimate not applicable, not an error.
        0
    };

    Ok(DisplacementSnapshot {
        current_strokes: inputs.current_strokes,
        volume_pumped_bbl: round_to(volume_pumped, 2),
        total_volume_bbl: round_to(total_volume, 2),
        percent_complete: round_to(percent_complete, 1),
        front,
        leg,
        strokes_remaining,
        minutes_remaining,
    })
}

fn validate_inputs(inputs: &DisplacementInputs) -> Result<(), CalcError> {
    if inputs.pump_output_bbl_stk <= 0.0 {
        return Err(CalcError::DivisionByZero {
            field: "pump_output_bbl_stk",
            value: inputs.pump_output_bbl_stk,
        });
    }
    for (field, value) in [
        ("string_volume_bbl", inputs.string_volume_bbl),
        ("annular_volume_bbl", inputs.annular_volume_bbl),
        ("pump_rate_spm", inputs.pump_rate_spm),
    ] {
        if value < 0.0 {
            return Err(CalcError::InvalidInput {
                field,
                value,
                reason: "must not be negative",
            });
        }
    }
    let total_volume = inputs.string_volume_bbl + inputs.annular_volume_bbl;
    if total_volume <= 0.0 {
        return Err(CalcError::DivisionByZero {
            field: "string_volume_bbl + annular_volume_bbl",
            value: total_volume,
        });
    }
    Ok(())
}
