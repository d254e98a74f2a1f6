//! Drill-string volume aggregation.

use crate::error::CalcError;
use crate::round::round_to;
use crate::types::{ComponentVolume, PipeComponent, StringVolumeReport, StringVolumeTotals};
use crate::volumetrics::capacity::{displacement_capacity, pipe_capacity};
use crate::volumetrics::strokes_for;

/// Aggregate a drill string into per-component and total volume figures.
///
/// Components are processed in input order; totals are order-invariant
/// sums. The whole batch is validated before anything is computed, so one
/// malformed component rejects the entire request with the failing index.
///
/// `pump_output_bbl_stk` drives the stroke counts; absent or non-positive
/// output yields stroke counts of 0.
pub fn calculate_string_volume(
    components: &[PipeComponent],
    pump_output_bbl_stk: Option<f64>,
) -> Result<StringVolumeReport, CalcError> {
    for (index, component) in components.iter().enumerate() {
        validate_component(component).map_err(|e| e.in_component(index))?;
    }

    let mut total_length = 0.0;
    let mut total_volume = 0.0;
    let mut total_displacement = 0.0;
    let mut rows = Vec::with_capacity(components.len());

    for component in components {
        let capacity = pipe_capacity(component.id_in)?;
        let volume = capacity * component.length_ft;
        let displacement =
            displacement_capacity(component.od_in, component.id_in)? * component.length_ft;

        total_length += component.length_ft;
        total_volume += volume;
        total_displacement += displacement;

        rows.push(ComponentVolume {
            component: component.clone(),
            capacity_bbl_ft: round_to(capacity, 4),
            volume_bbl: round_to(volume, 2),
            displacement_bbl: round_to(displacement, 2),
        });
    }

    Ok(StringVolumeReport {
        components: rows,
        totals: StringVolumeTotals {
            total_length_ft: round_to(total_length, 2),
            total_volume_bbl: round_to(total_volume, 2),
            total_displacement_bbl: round_to(total_displacement, 2),
            total_strokes: strokes_for(total_volume, pump_output_bbl_stk),
        },
    })
}

fn validate_component(component: &PipeComponent) -> Result<(), CalcError> {
    pipe_capacity(component.id_in)?;
    displacement_capacity(component.od_in, component.id_in)?;
    if component.length_ft < 0.0 {
        return Err(CalcError::InvalidInput {
            field: "length_ft",
            value: component.length_ft,
            reason: "must not be negative",
        });
    }
    Ok(())
}
