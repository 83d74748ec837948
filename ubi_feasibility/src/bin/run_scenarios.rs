//! Scenario comparison and parameter sweep runner
//!
//! With no arguments, computes every preset scenario, prints a comparison
//! table, and writes CSV/JSON outputs under results/scenario_comparison.
//! With a TOML config argument, sweeps one parameter over a value list on
//! top of a base preset.
//!
//! Usage:
//!   cargo run --release --bin run_scenarios
//!   cargo run --release --bin run_scenarios -- sweeps/alpha_sweep.toml

use rayon::prelude::*;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;
use ubi_feasibility::output::{ComparisonOutput, ScenarioRow};
use ubi_feasibility::scenarios::Scenario;
use ubi_feasibility::{ModelConstants, UbiParameters};

/// Sweep configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
struct SweepConfig {
    sweep: SweepSettings,
}

#[derive(Debug, Clone, Deserialize)]
struct SweepSettings {
    name: String,
    description: String,
    /// Preset key supplying all non-swept parameters
    base_scenario: String,
    parameter: String,
    values: Vec<f64>,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [sweep_config.toml]", args[0]);
        eprintln!("Example: {} sweeps/alpha_sweep.toml", args[0]);
        std::process::exit(1);
    }

    println!("=== UBI Feasibility Estimator ===\n");

    match args.get(1) {
        Some(config_path) => run_sweep(config_path),
        None => run_preset_comparison(),
    }
}

/// Compute and report all preset scenarios
fn run_preset_comparison() {
    let constants = ModelConstants::japan_2025();
    println!(
        "Reference economy: GDP {:.0} trillion yen, population {:.0} million\n",
        constants.base_gdp,
        constants.population / 1_000_000.0
    );

    let rows: Vec<ScenarioRow> = Scenario::all_scenarios()
        .into_iter()
        .map(|s| ScenarioRow::compute(s.key, s.name, s.params, &constants))
        .collect();

    println!(
        "{:<10} {:>12} {:>14} {:>12} {:>12} {:>10}",
        "scenario", "monthly UBI", "real monthly", "net surplus", "revenue", "inflation"
    );
    for row in &rows {
        let r = &row.result;
        println!(
            "{:<10} {:>10.0}yen {:>12.0}yen {:>10.1}tn {:>10.1}tn {:>9.1}%",
            row.key,
            r.monthly_ubi,
            r.real_monthly_ubi,
            r.net_surplus,
            r.total_revenue,
            r.inflation_rate
        );
    }

    let output_dir = PathBuf::from("results").join("scenario_comparison");
    let output = ComparisonOutput::new(rows, constants);
    if let Err(e) = output.write_all(&output_dir) {
        eprintln!("Error writing outputs: {}", e);
        std::process::exit(1);
    }

    println!("\nResults saved to: {}", output_dir.display());
}

/// Sweep one parameter over a value list on top of a base preset
fn run_sweep(config_path: &str) {
    println!("Loading sweep config: {}\n", config_path);

    let config_str = fs::read_to_string(config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: SweepConfig = toml::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing TOML config: {}", e);
        std::process::exit(1);
    });
    let sweep = &config.sweep;

    let base = Scenario::by_key(&sweep.base_scenario).unwrap_or_else(|| {
        eprintln!(
            "Unknown base scenario '{}' (expected one of: current, moderate, advanced, proposed)",
            sweep.base_scenario
        );
        std::process::exit(1);
    });

    println!("Sweep: {}", sweep.name);
    println!("Description: {}", sweep.description);
    println!(
        "Base scenario: {} | {} over {} values\n",
        base.key,
        sweep.parameter,
        sweep.values.len()
    );

    let constants = ModelConstants::japan_2025();
    let rows: Vec<ScenarioRow> = sweep
        .values
        .par_iter()
        .map(|&value| {
            let mut params = base.params.clone();
            if let Err(e) = apply_parameter_value(&mut params, &sweep.parameter, value) {
                eprintln!("{}", e);
                std::process::exit(1);
            }
            let key = format!("{}_{:.3}", sweep.parameter, value);
            let name = format!("{} = {:.3} ({})", sweep.parameter, value, base.key);
            ScenarioRow::compute(key, name, params, &constants)
        })
        .collect();

    for row in &rows {
        println!(
            "  {:<24} monthly UBI {:>10.0} yen, net surplus {:>8.1} tn",
            row.key, row.result.monthly_ubi, row.result.net_surplus
        );
    }

    let output_dir = PathBuf::from("results").join(&sweep.name);
    let output = ComparisonOutput::new(rows, constants);
    if let Err(e) = output.write_all(&output_dir) {
        eprintln!("Error writing outputs: {}", e);
        std::process::exit(1);
    }

    println!("\nResults saved to: {}", output_dir.display());
}

/// Set a single named parameter on the record
fn apply_parameter_value(
    params: &mut UbiParameters,
    name: &str,
    value: f64,
) -> Result<(), String> {
    match name {
        "alpha" => params.alpha = value,
        "beta" => params.beta = value,
        "gamma" => params.gamma = value,
        "tax_personal" => params.tax_personal = value,
        "tax_corporate" => params.tax_corporate = value,
        "tax_consumption" => params.tax_consumption = value,
        "tax_property" => params.tax_property = value,
        "social_cost_ratio" => params.social_cost_ratio = value,
        "fixed_cost_ratio" => params.fixed_cost_ratio = value,
        "gdp_per_capita_multiplier" => params.gdp_per_capita_multiplier = value,
        "social_insurance_ratio" => params.social_insurance_ratio = value,
        "tax_adjustment_factor" => params.tax_adjustment_factor = value,
        "fiscal_deficit_ratio" => params.fiscal_deficit_ratio = value,
        "social_security_reduction_rate" => params.social_security_reduction_rate = value,
        "inflation_sensitivity" => params.inflation_sensitivity = value,
        "tax_sensitivity" => params.tax_sensitivity = value,
        _ => return Err(format!("Unknown parameter: {}", name)),
    }
    Ok(())
}
