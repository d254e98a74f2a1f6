//! Annular volume aggregation.

use crate::error::CalcError;
use crate::round::round_to;
use crate::types::{AnnularVolumeReport, AnnularVolumeTotals, AnnulusSection, SectionVolume};
use crate::volumetrics::capacity::annular_capacity;
use crate::volumetrics::strokes_for;

/// Aggregate annulus intervals into per-section and total volume figures.
///
/// Same contract as the string calculator: validate everything first, one
/// malformed section rejects the whole request with the failing index, and
/// stroke counts round up (0 without a usable pump output). The total
/// stroke count is derived from the total volume, not by summing the
/// per-section counts.
pub fn calculate_annular_volumes(
    sections: &[AnnulusSection],
    pump_output_bbl_stk: Option<f64>,
) -> Result<AnnularVolumeReport, CalcError> {
    for (index, section) in sections.iter().enumerate() {
        validate_section(section).map_err(|e| e.in_section(index))?;
    }

    let mut total_volume = 0.0;
    let mut rows = Vec::with_capacity(sections.len());

    for section in sections {
        let length = section.bottom_depth_ft - section.top_depth_ft;
        let capacity = annular_capacity(section.hole_id_in, section.string_od_in)?;
        let volume = capacity * length;

        total_volume += volume;

        rows.push(SectionVolume {
            section: section.clone(),
            length_ft: round_to(length, 2),
            annular_capacity_bbl_ft: round_to(capacity, 4),
            annular_volume_bbl: round_to(volume, 2),
            strokes: strokes_for(volume, pump_output_bbl_stk),
        });
    }

    Ok(AnnularVolumeReport {
        sections: rows,
        totals: AnnularVolumeTotals {
            total_annular_volume_bbl: round_to(total_volume, 2),
            total_strokes: strokes_for(total_volume, pump_output_bbl_stk),
        },
    })
}

fn validate_section(section: &AnnulusSection) -> Result<(), CalcError> {
    if section.bottom_depth_ft <= section.top_depth_ft {
        return Err(CalcError::InvalidInput {
            field: "bottom_depth_ft",
            value: section.bottom_depth_ft,
            reason: "must be deeper than the top depth",
        });
    }
    annular_capacity(section.hole_id_in, section.string_od_in)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(hole_id: f64, string_od: f64, top: f64, bottom: f64) -> AnnulusSection {
        AnnulusSection {
            label: None,
            hole_id_in: hole_id,
            string_od_in: string_od,
            top_depth_ft: top,
            bottom_depth_ft: bottom,
        }
    }

    #[test]
    fn single_section_volume() {
        let report =
            calculate_annular_volumes(&[section(8.5, 5.0, 0.0, 10_000.0)], Some(0.1)).unwrap();

        // capacity = (8.5² − 5²)/1029.4 = 0.0459 bbl/ft; volume = 459.0 bbl
        assert_eq!(report.sections[0].annular_capacity_bbl_ft, 0.0459);
        assert_eq!(report.sections[0].length_ft, 10_000.0);
        let expected_volume = (8.5_f64.powi(2) - 25.0) / 1029.4 * 10_000.0;
        assert_eq!(
            report.totals.total_annular_volume_bbl,
            (expected_volume * 100.0).round() / 100.0
        );
        assert_eq!(
            report.totals.total_strokes,
            (expected_volume / 0.1).ceil() as u64
        );
    }

    #[test]
    fn total_strokes_come_from_total_volume_not_per_section_sum() {
        // Two sections of 4.99 bbl each: per-section ceil gives 50 + 50,
        // the total gives ceil(9.98 / 0.1) = 100.
        // Construct lengths from the capacity so the volumes land exactly.
        let capacity = (8.5_f64.powi(2) - 25.0) / 1029.4;
        let length = 4.99 / capacity;
        let report = calculate_annular_volumes(
            &[
                section(8.5, 5.0, 0.0, length),
                section(8.5, 5.0, length, 2.0 * length),
            ],
            Some(0.1),
        )
        .unwrap();

        assert_eq!(report.sections[0].strokes, 50);
        assert_eq!(report.sections[1].strokes, 50);
        assert_eq!(report.totals.total_strokes, 100);
    }

    #[test]
    fn inverted_depths_reject_whole_batch() {
        let err = calculate_annular_volumes(
            &[
                section(8.5, 5.0, 0.0, 5_000.0),
                section(8.5, 5.0, 6_000.0, 6_000.0), // zero length
            ],
            None,
        )
        .unwrap_err();

        match err {
            CalcError::InvalidSection { index, .. } => assert_eq!(index, 1),
            other => panic!("expected InvalidSection, got {other:?}"),
        }
    }

    #[test]
    fn string_od_at_hole_id_rejects_section() {
        let err =
            calculate_annular_volumes(&[section(5.0, 5.0, 0.0, 1_000.0)], None).unwrap_err();
        assert!(matches!(err, CalcError::InvalidSection { index: 0, .. }));
    }
}
