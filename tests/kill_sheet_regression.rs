//! Kill-Sheet Regression Tests
//!
//! Locks the reference kick scenario and the boundary behaviors of the
//! calculation chain: stroke rounding, kick-intensity thresholds, the
//! MAASP flag, and the displacement tie-break. Values asserted here are
//! derived from the formulas once and then frozen; a change in any of
//! them is a behavior change, not a refactor.

use killsheet::{
    calculate_annular_volumes, calculate_kill_sheet, calculate_pump_output,
    calculate_string_volume, track_displacement, AnnulusSection, DisplacementInputs, FluidFront,
    KickIntensity, KillSheetInputs, PipeComponent, PumpSpec, PumpType,
};

fn reference_inputs() -> KillSheetInputs {
    KillSheetInputs {
        current_mud_weight_ppg: 10.0,
        tvd_ft: 10_000.0,
        sidpp_psi: 500.0,
        sicp_psi: 600.0,
        scr_psi: 800.0,
        pit_gain_bbl: 20.0,
        shoe_tvd_ft: 5_000.0,
        lot_emw_ppg: 14.0,
        string_volume_bbl: 185.0,
        annular_volume_bbl: 1_800.0,
        pump_output_bbl_stk: 0.1,
    }
}

// ============================================================================
// Primary Regression Scenario
// ============================================================================

#[test]
fn reference_kick_kill_sheet() {
    let report = calculate_kill_sheet(&reference_inputs()).unwrap();

    // formation = 500 + 10 × 0.052 × 10000
    assert_eq!(report.formation_pressure_psi, 5_700.0);
    // kill MW = 10 + 500/0.052/10000 = 10.9615…
    assert_eq!(report.kill_mud_weight_ppg, 10.96);
    assert_eq!(report.icp_psi, 1_300.0);
    assert_eq!(report.fcp_psi, 877.0);
    assert_eq!(report.maasp_psi, 790.0);
    assert_eq!(report.strokes_to_bit, 1_850);
    assert_eq!(report.strokes_bottoms_up, 19_850);
    assert_eq!(report.kill_mud_volume_bbl, 1_985.0);
    // gradient = (600 − 500)/20 = 5 psi/bbl → gas kick
    assert_eq!(report.kick_gradient_psi_bbl, 5.0);
    assert_eq!(report.kick_intensity, KickIntensity::HighGas);
    assert!(!report.maasp_violation);

    assert_eq!(report.pressure_schedule.len(), 21);
    assert_eq!(report.pressure_schedule[0].strokes, 0);
    assert_eq!(report.pressure_schedule[0].drillpipe_pressure_psi, 1_300.0);
    assert_eq!(report.pressure_schedule[20].strokes, 1_850);
    assert_eq!(report.pressure_schedule[20].drillpipe_pressure_psi, 877.0);
    assert_eq!(report.pressure_schedule[20].percent_complete, 100.0);
}

// ============================================================================
// Boundary Behaviors
// ============================================================================

#[test]
fn strokes_to_bit_rounding_boundary() {
    let mut inputs = reference_inputs();
    assert_eq!(calculate_kill_sheet(&inputs).unwrap().strokes_to_bit, 1_850);

    // One hundredth of a barrel more tips into the next whole stroke.
    inputs.string_volume_bbl = 185.01;
    assert_eq!(calculate_kill_sheet(&inputs).unwrap().strokes_to_bit, 1_851);
}

#[test]
fn kick_intensity_thresholds_are_strict() {
    // Pit gain 10 bbl and SIDPP 0 pin the gradient at sicp/10 exactly.
    let intensity_at = |sicp: f64| {
        let mut inputs = reference_inputs();
        inputs.sidpp_psi = 0.0;
        inputs.sicp_psi = sicp;
        inputs.pit_gain_bbl = 10.0;
        calculate_kill_sheet(&inputs).unwrap().kick_intensity
    };

    assert_eq!(intensity_at(4.5), KickIntensity::MediumOilWater); // 0.45 exactly
    assert_eq!(intensity_at(4.500_001), KickIntensity::HighGas);
    assert_eq!(intensity_at(3.0), KickIntensity::Low); // 0.30 exactly
}

#[test]
fn maasp_flag_boundary() {
    // SIDPP 0 → kill MW = current MW → MAASP = 4 × 0.052 × 5000 = 1040.
    let mut inputs = reference_inputs();
    inputs.sidpp_psi = 0.0;

    inputs.sicp_psi = 1_040.0;
    assert!(!calculate_kill_sheet(&inputs).unwrap().maasp_violation);

    inputs.sicp_psi = 1_041.0;
    let report = calculate_kill_sheet(&inputs).unwrap();
    assert!(report.maasp_violation);
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn displacement_tie_break_at_the_bit() {
    // 200 strokes × 0.5 bbl/stk = the string volume exactly: the front has
    // just turned the bit, so it reports in-annulus at 0%.
    let snapshot = track_displacement(&DisplacementInputs {
        current_strokes: 200,
        pump_output_bbl_stk: 0.5,
        string_volume_bbl: 100.0,
        annular_volume_bbl: 400.0,
        pump_rate_spm: 30.0,
    })
    .unwrap();

    assert_eq!(snapshot.front, FluidFront::InAnnulus);
    assert_eq!(snapshot.leg.percent_complete, 0.0);
}

// ============================================================================
// End-to-End Pipeline
// ============================================================================

#[test]
fn pipeline_from_geometry_to_displacement() {
    let string = calculate_string_volume(
        &[PipeComponent {
            name: "5\" DP".to_string(),
            od_in: 5.0,
            id_in: 3.0,
            length_ft: 10_000.0,
            grade: None,
            connection: None,
        }],
        Some(0.1),
    )
    .unwrap();

    // volume = 3²/1029.4 × 10000 = 87.43 bbl → ceil(874.3) = 875 strokes
    assert_eq!(string.totals.total_volume_bbl, 87.43);
    assert_eq!(string.totals.total_strokes, 875);

    let annulus = calculate_annular_volumes(
        &[AnnulusSection {
            label: None,
            hole_id_in: 8.5,
            string_od_in: 5.0,
            top_depth_ft: 0.0,
            bottom_depth_ft: 10_000.0,
        }],
        Some(0.1),
    )
    .unwrap();
    assert_eq!(annulus.totals.total_annular_volume_bbl, 459.01);

    let mut inputs = reference_inputs();
    inputs.string_volume_bbl = string.totals.total_volume_bbl;
    inputs.annular_volume_bbl = annulus.totals.total_annular_volume_bbl;
    let kill_sheet = calculate_kill_sheet(&inputs).unwrap();

    assert_eq!(kill_sheet.strokes_to_bit, 875);
    assert_eq!(kill_sheet.kill_mud_volume_bbl, 546.44);

    // Halfway down the string by strokes: still in-string.
    let snapshot = track_displacement(&DisplacementInputs {
        current_strokes: 400,
        pump_output_bbl_stk: 0.1,
        string_volume_bbl: string.totals.total_volume_bbl,
        annular_volume_bbl: annulus.totals.total_annular_volume_bbl,
        pump_rate_spm: 30.0,
    })
    .unwrap();
    assert_eq!(snapshot.front, FluidFront::InString);
    assert_eq!(snapshot.volume_pumped_bbl, 40.0);
}

#[test]
fn pump_output_feeds_the_stroke_counts() {
    let pump = calculate_pump_output(&PumpSpec {
        liner_size_in: 6.0,
        stroke_length_in: 12.0,
        efficiency: 0.95,
        pump_type: PumpType::Triplex,
    })
    .unwrap();
    assert_eq!(pump.per_stroke_bbl, 4.1878);

    let mut inputs = reference_inputs();
    inputs.pump_output_bbl_stk = pump.per_stroke_bbl;
    let report = calculate_kill_sheet(&inputs).unwrap();

    // ceil(185 / 4.1878) = ceil(44.17…) = 45
    assert_eq!(report.strokes_to_bit, 45);
    // ceil(1985 / 4.1878) = ceil(473.99…) = 474
    assert_eq!(report.strokes_bottoms_up, 474);
}
