//! Structured export of scenario comparisons
//!
//! Writes computed scenarios to CSV (one row per scenario, for charting
//! and spreadsheet analysis) and to a JSON summary carrying the full
//! parameter and result records plus run metadata for reproducibility.

use crate::{calculator, ModelConstants, UbiParameters, UbiResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level container for a comparison run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonOutput {
    pub metadata: RunMetadata,
    pub rows: Vec<ScenarioRow>,
}

/// Metadata for reproducibility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    pub constants: ModelConstants,
    pub timestamp: String,
    pub git_commit: Option<String>,
}

/// One computed scenario: the label, the inputs, and the full result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRow {
    pub key: String,
    pub name: String,
    pub params: UbiParameters,
    pub result: UbiResult,
}

impl ScenarioRow {
    /// Compute a labelled parameter set under the given constants
    pub fn compute(
        key: impl Into<String>,
        name: impl Into<String>,
        params: UbiParameters,
        constants: &ModelConstants,
    ) -> Self {
        let result = calculator::calculate_ubi_with(&params, constants);
        ScenarioRow {
            key: key.into(),
            name: name.into(),
            params,
            result,
        }
    }
}

impl ComparisonOutput {
    pub fn new(rows: Vec<ScenarioRow>, constants: ModelConstants) -> Self {
        ComparisonOutput {
            metadata: RunMetadata {
                constants,
                timestamp: chrono::Utc::now().to_rfc3339(),
                git_commit: current_git_commit(),
            },
            rows,
        }
    }

    /// Write one row per scenario to CSV
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let mut wtr = csv::Writer::from_path(path)?;

        wtr.write_record([
            "key",
            "name",
            "monthly_ubi",
            "annual_ubi",
            "real_monthly_ubi",
            "adjusted_gdp",
            "adjusted_tax_revenue",
            "fiscal_deficit",
            "total_revenue",
            "net_surplus",
            "inflation_rate",
            "productivity_coefficient",
            "social_security_reduction",
            "total_ubi_payment",
        ])?;

        for row in &self.rows {
            let r = &row.result;
            wtr.write_record(&[
                row.key.clone(),
                row.name.clone(),
                r.monthly_ubi.to_string(),
                r.annual_ubi.to_string(),
                r.real_monthly_ubi.to_string(),
                r.adjusted_gdp.to_string(),
                r.adjusted_tax_revenue.to_string(),
                r.fiscal_deficit.to_string(),
                r.total_revenue.to_string(),
                r.net_surplus.to_string(),
                r.inflation_rate.to_string(),
                r.productivity_coefficient.to_string(),
                r.social_security_reduction.to_string(),
                r.total_ubi_payment.to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Write the full comparison (metadata, parameters, results) as JSON
    pub fn write_summary_json<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Write both outputs into a directory
    ///
    /// Creates:
    /// - scenario_comparison.csv
    /// - summary.json
    pub fn write_all<P: AsRef<Path>>(&self, dir: P) -> Result<(), Box<dyn std::error::Error>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        self.write_csv(dir.join("scenario_comparison.csv"))?;
        self.write_summary_json(dir.join("summary.json"))?;

        Ok(())
    }
}

fn current_git_commit() -> Option<String> {
    std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
}
