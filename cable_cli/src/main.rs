//! # Cablesize CLI
//!
//! Terminal front-end for the cable sizing engine. Prompts for the common
//! parameters, runs one calculation against the standard catalogue, and
//! prints a formatted report plus the raw JSON result.

use std::io::{self, BufRead, Write};

use cable_core::derating::{InstallationMethod, SoilConditions};
use cable_core::materials::StandardMode;
use cable_core::selection::SelectionStatus;
use cable_core::sizing::{calculate_with_standard_catalogue, CableSizingInput};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn status_icon(ok: bool) -> &'static str {
    if ok {
        "[OK]"
    } else {
        "[FAIL]"
    }
}

fn main() {
    println!("Cablesize CLI - Cable Sizing Calculator");
    println!("=======================================");
    println!();

    let load_kw = prompt_f64("Enter load (kW) [100.0]: ", 100.0);
    let voltage_v = prompt_f64("Enter system voltage (V) [415.0]: ", 415.0);
    let length_m = prompt_f64("Enter route length (m) [50.0]: ", 50.0);
    let ambient_temp_c = prompt_f64("Enter ambient temperature (C) [40.0]: ", 40.0);

    println!();
    println!("Sizing Cu/XLPE on tray, single circuit, auto-derating...");
    println!();

    let input = CableSizingInput {
        cable_number: "CLI-DEMO".to_string(),
        load_kw: Some(load_kw),
        load_kva: None,
        voltage_v,
        pf: 0.85,
        efficiency: 0.95,
        length_m,
        standard_mode: StandardMode::Iec,
        conductor_material: "CU".to_string(),
        insulation_type: "XLPE".to_string(),
        cores: 3.5,
        installation_method: InstallationMethod::TrayAir,
        ambient_temp_c,
        num_circuits: 1,
        num_runs: 1,
        soil: SoilConditions::default(),
        use_auto_derating: true,
        derating_factors: None,
        allowable_vdrop_percent: 5.0,
        isc_ka: None,
        sc_duration_s: None,
        k_const: None,
    };

    match calculate_with_standard_catalogue(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  CABLE SIZING RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Load:     {:.1} kW ({})", load_kw, result.load_basis);
            println!("  Voltage:  {:.0} V", result.voltage_v);
            println!("  Length:   {:.0} m", result.length_m);
            println!("  Ambient:  {:.0} C on {}", ambient_temp_c, result.installation_method);
            println!();
            println!("Currents:");
            println!("  FLC    = {:.1} A", result.flc_a);
            println!(
                "  Irated = {:.1} A (derating overall {:.3})",
                result.irated_a, result.derating.overall
            );
            println!(
                "  k1={:.2} k2={:.2} k3={:.2} k4={:.2} k5={:.2}",
                result.derating.k1_ambient,
                result.derating.k2_group,
                result.derating.k3_ground_temp,
                result.derating.k4_depth,
                result.derating.k5_soil
            );
            println!();
            match result.selection.candidate {
                Some(candidate) => {
                    println!("Selected size: {:.1} mm² (CCA {:.0} A)", candidate.size_mm2, candidate.cca_a);
                    println!(
                        "  Ampacity:     {}",
                        status_icon(candidate.cca_ok)
                    );
                    println!(
                        "  Voltage drop: {:.2} % of {:.1} % allowed {}",
                        candidate.voltage_drop_percent,
                        result.allowable_vdrop_percent,
                        status_icon(candidate.vd_ok)
                    );
                    if let Some(area) = candidate.short_circuit_area_required_mm2 {
                        println!(
                            "  Short circuit: needs {:.1} mm² {}",
                            area,
                            status_icon(candidate.sc_ok)
                        );
                    }
                }
                None => {
                    println!("No catalogue size can carry the rated current.");
                }
            }
            println!();
            println!("═══════════════════════════════════════");
            println!(
                "  RESULT: {}",
                match result.overall_status {
                    SelectionStatus::Ok => "OK",
                    SelectionStatus::NoSizeFullyOk => "CHECK (no size fully OK)",
                    SelectionStatus::NoCatalogMatch => "NO CATALOGUE MATCH",
                }
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}
