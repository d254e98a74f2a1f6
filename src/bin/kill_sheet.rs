//! Kill-sheet CLI
//!
//! Loads a well scenario (TOML), runs the volumetrics pipeline, and prints
//! the kill sheet. With `--strokes N` it also reports where the kill mud
//! front is after N strokes.
//!
//! # Usage
//! ```bash
//! kill-sheet scenario.toml
//! kill-sheet scenario.toml --strokes 1200 --format json
//! RUST_LOG=debug kill-sheet scenario.toml
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use serde::Serialize;

use killsheet::scenario::WellScenario;
use killsheet::{
    calculate_annular_volumes, calculate_kill_sheet, calculate_pump_output,
    calculate_string_volume, track_displacement, AnnularVolumeReport, DisplacementInputs,
    DisplacementSnapshot, KillSheetReport, PumpOutputReport, StringVolumeReport,
};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "kill-sheet")]
#[command(about = "Well-control kill sheet calculator")]
#[command(version = "1.0")]
struct Args {
    /// Path to the scenario TOML file
    scenario: PathBuf,

    /// Also show a displacement snapshot after this many strokes pumped
    #[arg(short, long)]
    strokes: Option<u64>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: String,
}

/// Everything one run produces, for `--format json`.
#[derive(Serialize)]
struct RunOutput {
    well: String,
    pump: PumpOutputReport,
    string: StringVolumeReport,
    annulus: AnnularVolumeReport,
    kill_sheet: KillSheetReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    displacement: Option<DisplacementSnapshot>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let scenario = WellScenario::load(&args.scenario)
        .with_context(|| format!("loading scenario {}", args.scenario.display()))?;

    let pump = calculate_pump_output(&scenario.pump).context("pump output")?;
    let string = calculate_string_volume(&scenario.string, Some(pump.per_stroke_bbl))
        .context("string volume")?;
    let annulus = calculate_annular_volumes(&scenario.annulus, Some(pump.per_stroke_bbl))
        .context("annular volumes")?;

    let inputs = scenario.kill_sheet_inputs(
        string.totals.total_volume_bbl,
        annulus.totals.total_annular_volume_bbl,
        pump.per_stroke_bbl,
    );
    let kill_sheet = calculate_kill_sheet(&inputs).context("kill sheet")?;

    let displacement = match args.strokes {
        Some(current_strokes) => Some(
            track_displacement(&DisplacementInputs {
                current_strokes,
                pump_output_bbl_stk: pump.per_stroke_bbl,
                string_volume_bbl: string.totals.total_volume_bbl,
                annular_volume_bbl: annulus.totals.total_annular_volume_bbl,
                pump_rate_spm: scenario.kill_rate_spm,
            })
            .context("displacement tracking")?,
        ),
        None => None,
    };

    let output = RunOutput {
        well: scenario.well.name.clone(),
        pump,
        string,
        annulus,
        kill_sheet,
        displacement,
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_text(&output);
    }

    Ok(())
}

// ============================================================================
// Text Report
// ============================================================================

fn print_text(output: &RunOutput) {
    let ks = &output.kill_sheet;

    println!("KILL SHEET - {}", output.well);
    println!("{}", "=".repeat(60));

    println!("\nVolumes");
    println!(
        "  String volume        {:>10.2} bbl  ({} strokes to bit)",
        output.string.totals.total_volume_bbl, ks.strokes_to_bit
    );
    println!(
        "  Annular volume       {:>10.2} bbl",
        output.annulus.totals.total_annular_volume_bbl
    );
    println!(
        "  Kill mud volume      {:>10.2} bbl  ({} strokes bottoms-up)",
        ks.kill_mud_volume_bbl, ks.strokes_bottoms_up
    );
    println!(
        "  Pump output          {:>10.4} bbl/stk ({} @ {} cylinders)",
        output.pump.per_stroke_bbl, output.pump.spec.pump_type, output.pump.cylinders
    );

    println!("\nPressures");
    println!("  Formation pressure   {:>10.0} psi", ks.formation_pressure_psi);
    println!("  Kill mud weight      {:>10.2} ppg", ks.kill_mud_weight_ppg);
    println!("  ICP                  {:>10.0} psi", ks.icp_psi);
    println!("  FCP                  {:>10.0} psi", ks.fcp_psi);
    println!("  MAASP                {:>10.0} psi", ks.maasp_psi);

    println!("\nKick");
    println!("  Gradient             {:>10.3} psi/bbl", ks.kick_gradient_psi_bbl);
    println!("  Intensity            {:>10}", ks.kick_intensity);

    println!("\nDrillpipe pressure schedule");
    println!("  {:>8}  {:>8}  {:>6}", "strokes", "psi", "%");
    for step in &ks.pressure_schedule {
        println!(
            "  {:>8}  {:>8.0}  {:>6.1}",
            step.strokes, step.drillpipe_pressure_psi, step.percent_complete
        );
    }

    for warning in &ks.warnings {
        println!("\n{warning}");
    }

    if let Some(snapshot) = &output.displacement {
        println!("\nDisplacement after {} strokes", snapshot.current_strokes);
        println!(
            "  Front                {:>10}  ({:.1}% of leg)",
            snapshot.front, snapshot.leg.percent_complete
        );
        println!(
            "  Pumped               {:>10.2} bbl of {:.2} bbl ({:.1}%)",
            snapshot.volume_pumped_bbl, snapshot.total_volume_bbl, snapshot.percent_complete
        );
        println!(
            "  Remaining            {:>10} strokes (~{} min, ETA {})",
            snapshot.strokes_remaining,
            snapshot.minutes_remaining,
            snapshot
                .estimated_completion(Utc::now())
                .format("%H:%M UTC")
        );
    }
}
