//! Mud-pump output calculation.

use crate::constants::{GAL_PER_BBL, L_PER_BBL, PUMP_OUTPUT_DIVISOR, STANDARD_PUMP_RATES_SPM};
use crate::error::CalcError;
use crate::round::round_to;
use crate::types::{PumpOutputReport, PumpRateRow, PumpSpec};

/// Per-stroke pump output plus the standard slow-pump rate table.
///
/// Formula: `output = liner² × stroke_length × cylinders × efficiency / 294`
/// (bbl/stk). Output is strictly increasing in liner size and stroke
/// length and strictly positive for valid inputs.
///
/// The rate table covers 20–100 SPM in steps of 10, each row derived from
/// the unrounded per-stroke output.
pub fn calculate_pump_output(spec: &PumpSpec) -> Result<PumpOutputReport, CalcError> {
    validate_spec(spec)?;

    let cylinders = spec.pump_type.cylinders();
    let per_stroke = spec.liner_size_in * spec.liner_size_in
        * spec.stroke_length_in
        * f64::from(cylinders)
        * spec.efficiency
        / PUMP_OUTPUT_DIVISOR;

    let table = STANDARD_PUMP_RATES_SPM
        .iter()
        .map(|&spm| {
            let bbl_min = per_stroke * f64::from(spm);
            PumpRateRow {
                spm,
                bbl_min: round_to(bbl_min, 3),
                bbl_stk: round_to(per_stroke, 4),
                gal_min: round_to(bbl_min * GAL_PER_BBL, 2),
                l_min: round_to(bbl_min * L_PER_BBL, 2),
            }
        })
        .collect();

    Ok(PumpOutputReport {
        spec: spec.clone(),
        cylinders,
        per_stroke_bbl: round_to(per_stroke, 4),
        table,
    })
}

fn validate_spec(spec: &PumpSpec) -> Result<(), CalcError> {
    if spec.liner_size_in <= 0.0 {
        return Err(CalcError::InvalidPumpSpec {
            field: "liner_size_in",
            value: spec.liner_size_in,
            reason: "must be positive",
        });
    }
    if spec.stroke_length_in <= 0.0 {
        return Err(CalcError::InvalidPumpSpec {
            field: "stroke_length_in",
            value: spec.stroke_length_in,
            reason: "must be positive",
        });
    }
    if spec.efficiency <= 0.0 || spec.efficiency > 1.0 {
        return Err(CalcError::InvalidPumpSpec {
            field: "efficiency",
            value: spec.efficiency,
            reason: "must be a fraction in (0, 1]",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PumpType;

    fn spec(liner: f64, stroke: f64, efficiency: f64, pump_type: PumpType) -> PumpSpec {
        PumpSpec {
            liner_size_in: liner,
            stroke_length_in: stroke,
            efficiency,
            pump_type,
        }
    }

    #[test]
    fn triplex_per_stroke_output() {
        let report = calculate_pump_output(&spec(6.0, 12.0, 0.95, PumpType::Triplex)).unwrap();
        // 36 × 12 × 3 × 0.95 / 294 = 4.1878 bbl/stk
        assert_eq!(report.cylinders, 3);
        assert_eq!(report.per_stroke_bbl, 4.1878);
    }

    #[test]
    fn duplex_uses_two_cylinders() {
        let triplex = calculate_pump_output(&spec(6.0, 12.0, 0.95, PumpType::Triplex)).unwrap();
        let duplex = calculate_pump_output(&spec(6.0, 12.0, 0.95, PumpType::Duplex)).unwrap();
        assert_eq!(duplex.cylinders, 2);
        // Exactly two thirds of the triplex output.
        let raw_triplex = 36.0 * 12.0 * 3.0 * 0.95 / 294.0;
        assert_eq!(duplex.per_stroke_bbl, round_to(raw_triplex * 2.0 / 3.0, 4));
        assert!(duplex.per_stroke_bbl < triplex.per_stroke_bbl);
    }

    #[test]
    fn table_covers_standard_rates_with_derived_columns() {
        let report = calculate_pump_output(&spec(6.0, 12.0, 1.0, PumpType::Triplex)).unwrap();
        assert_eq!(report.table.len(), 9);
        assert_eq!(report.table[0].spm, 20);
        assert_eq!(report.table[8].spm, 100);

        let per_stroke = 36.0 * 12.0 * 3.0 / 294.0;
        let row = &report.table[4]; // 60 SPM
        assert_eq!(row.bbl_min, round_to(per_stroke * 60.0, 3));
        assert_eq!(row.gal_min, round_to(per_stroke * 60.0 * 42.0, 2));
        assert_eq!(row.l_min, round_to(per_stroke * 60.0 * 159.0, 2));
    }

    #[test]
    fn output_increases_with_liner_and_stroke() {
        let base = calculate_pump_output(&spec(5.0, 10.0, 0.9, PumpType::Triplex)).unwrap();
        let bigger_liner = calculate_pump_output(&spec(5.5, 10.0, 0.9, PumpType::Triplex)).unwrap();
        let longer_stroke = calculate_pump_output(&spec(5.0, 11.0, 0.9, PumpType::Triplex)).unwrap();
        assert!(bigger_liner.per_stroke_bbl > base.per_stroke_bbl);
        assert!(longer_stroke.per_stroke_bbl > base.per_stroke_bbl);
    }

    #[test]
    fn rejects_out_of_range_efficiency() {
        assert!(calculate_pump_output(&spec(6.0, 12.0, 0.0, PumpType::Triplex)).is_err());
        assert!(calculate_pump_output(&spec(6.0, 12.0, 1.01, PumpType::Triplex)).is_err());
        // Exactly 1.0 is a valid (ideal) efficiency.
        assert!(calculate_pump_output(&spec(6.0, 12.0, 1.0, PumpType::Triplex)).is_ok());
    }

    #[test]
    fn rejects_non_positive_geometry() {
        let err = calculate_pump_output(&spec(0.0, 12.0, 0.95, PumpType::Triplex)).unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidPumpSpec {
                field: "liner_size_in",
                ..
            }
        ));
        assert!(calculate_pump_output(&spec(6.0, -1.0, 0.95, PumpType::Triplex)).is_err());
    }
}
