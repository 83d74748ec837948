//! Preset scenario catalog
//!
//! Fixed parameter sets used as starting points for exploration. Purely
//! declarative data: the canonical ordering current < moderate < advanced
//! < proposed tracks strictly increasing AI labor substitution (alpha),
//! a design intent checked by tests rather than enforced at runtime.

use crate::UbiParameters;

/// A named preset parameter set
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Stable identifier used in exports and sweep configs
    pub key: &'static str,
    /// Display name
    pub name: String,
    pub params: UbiParameters,
}

impl Scenario {
    /// Status quo (2025): near-zero AI substitution, current Japanese tax
    /// rates and spending ratios. Runs a fiscal deficit; sustains no UBI.
    pub fn current() -> Self {
        Scenario {
            key: "current",
            name: "Status quo (2025)".to_string(),
            params: UbiParameters {
                alpha: 0.05,
                beta: 0.20,
                gamma: 1.0,
                tax_personal: 0.08,
                tax_corporate: 0.30,
                tax_consumption: 0.10,
                tax_property: 0.017,
                // Total outlays 196 / GDP 600
                social_cost_ratio: 0.327,
                // Irreducible outlays 77.1 / GDP 600
                fixed_cost_ratio: 0.129,
                gdp_per_capita_multiplier: 1.0,
                social_insurance_ratio: 1.0,
                // Observed yield 123.2 vs theoretical 136.1
                tax_adjustment_factor: 0.905,
                // Bond issuance 28.7 / GDP 600
                fiscal_deficit_ratio: 0.048,
                social_security_reduction_rate: 0.5,
                inflation_sensitivity: 0.2,
                tax_sensitivity: 0.3,
            },
        }
    }

    /// Moderate AI progress: 30% substitution, higher capture of gains by
    /// capital, partial tax financing of social insurance.
    pub fn moderate() -> Self {
        Scenario {
            key: "moderate",
            name: "Moderate AI progress".to_string(),
            params: UbiParameters {
                alpha: 0.30,
                beta: 0.50,
                gamma: 1.3,
                tax_personal: 0.20,
                tax_corporate: 0.50,
                tax_consumption: 0.12,
                tax_property: 0.02,
                social_cost_ratio: 0.30,
                fixed_cost_ratio: 0.12,
                gdp_per_capita_multiplier: 1.2,
                social_insurance_ratio: 0.5,
                tax_adjustment_factor: 0.95,
                fiscal_deficit_ratio: 0.02,
                social_security_reduction_rate: 0.6,
                inflation_sensitivity: 0.2,
                tax_sensitivity: 0.3,
            },
        }
    }

    /// Advanced AI progress: 60% substitution, social insurance mostly
    /// tax-financed, balanced primary budget.
    pub fn advanced() -> Self {
        Scenario {
            key: "advanced",
            name: "Advanced AI progress".to_string(),
            params: UbiParameters {
                alpha: 0.60,
                beta: 0.70,
                gamma: 1.6,
                tax_personal: 0.15,
                tax_corporate: 0.70,
                tax_consumption: 0.15,
                tax_property: 0.025,
                social_cost_ratio: 0.25,
                fixed_cost_ratio: 0.10,
                gdp_per_capita_multiplier: 1.5,
                social_insurance_ratio: 0.2,
                tax_adjustment_factor: 1.0,
                fiscal_deficit_ratio: 0.0,
                social_security_reduction_rate: 0.7,
                inflation_sensitivity: 0.2,
                tax_sensitivity: 0.3,
            },
        }
    }

    /// Proposed case: 80% substitution, heavy corporate taxation of AI
    /// capital income, fully tax-financed social insurance, no borrowing.
    pub fn proposed() -> Self {
        Scenario {
            key: "proposed",
            name: "Proposed case".to_string(),
            params: UbiParameters {
                alpha: 0.80,
                beta: 0.80,
                gamma: 1.8,
                tax_personal: 0.10,
                tax_corporate: 0.80,
                tax_consumption: 0.15,
                tax_property: 0.03,
                social_cost_ratio: 0.20,
                fixed_cost_ratio: 0.08,
                gdp_per_capita_multiplier: 1.8,
                social_insurance_ratio: 0.0,
                tax_adjustment_factor: 1.0,
                fiscal_deficit_ratio: 0.0,
                social_security_reduction_rate: 0.8,
                inflation_sensitivity: 0.2,
                tax_sensitivity: 0.3,
            },
        }
    }

    /// All presets in canonical order of increasing AI substitution
    pub fn all_scenarios() -> Vec<Self> {
        vec![
            Self::current(),
            Self::moderate(),
            Self::advanced(),
            Self::proposed(),
        ]
    }

    /// Look up a preset by its stable key
    pub fn by_key(key: &str) -> Option<Self> {
        Self::all_scenarios().into_iter().find(|s| s.key == key)
    }
}
