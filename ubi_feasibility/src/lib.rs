//! UBI Feasibility Estimator
//!
//! Single-period macroeconomic model estimating the per-capita universal
//! basic income (UBI) an AI-transformed economy could sustain. Given AI
//! labor substitution, capital concentration, tax rates, and fiscal policy
//! parameters, the model derives GDP, tax revenue, government costs, and
//! the disposable fiscal surplus available for distribution as UBI.
//!
//! Key mechanisms:
//! - Corporate taxation dampens the AI productivity multiplier
//! - UBI payments displace part of legacy social-security spending, which
//!   feeds back into the affordable UBI (resolved by a fixed-point loop)
//! - Large UBI outlays induce inflation that erodes real purchasing power
//!
//! The core entry point is [`calculator::calculate_ubi`]: a pure, total,
//! deterministic function with no I/O and no shared state. Per-capita
//! figures are in yen; aggregate figures are in trillion yen.

pub mod calculator;
pub mod helpers;
pub mod output;
pub mod scenarios;

use serde::{Deserialize, Serialize};

/// Model input parameters
///
/// All fields are real numbers with documented semantic ranges, but the
/// model never rejects out-of-range values: callers exploring "what if"
/// get whatever the formulas produce. Serializes as a flat
/// field-to-number mapping for interoperability with presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UbiParameters {
    /// α - fraction of labor output displaced by AI [0, 1]
    pub alpha: f64,
    /// β - fraction of productivity gains captured by capital [0, 1]
    pub beta: f64,
    /// γ - baseline productivity multiplier [1.0, 2.0]
    pub gamma: f64,
    /// Personal income tax rate [0, 1]
    pub tax_personal: f64,
    /// Corporate tax rate [0, 1]
    pub tax_corporate: f64,
    /// Consumption tax rate [0, 1]
    pub tax_consumption: f64,
    /// Property tax rate [0, 1]
    pub tax_property: f64,
    /// Total non-UBI government spending as a fraction of GDP [0, 1]
    pub social_cost_ratio: f64,
    /// Portion of social_cost_ratio immune to UBI-driven reduction
    /// [0, social_cost_ratio]
    pub fixed_cost_ratio: f64,
    /// Scales baseline GDP [0.5, 3.0]
    pub gdp_per_capita_multiplier: f64,
    /// Fraction of the social-insurance burden left on citizens rather
    /// than financed from tax revenue [0, 1]: 1 = status quo, 0 = fully
    /// tax-financed
    pub social_insurance_ratio: f64,
    /// Calibration factor mapping theoretical to observed tax yield
    /// [0.5, 1.5]
    pub tax_adjustment_factor: f64,
    /// New borrowing as a fraction of GDP [0, 0.1]
    pub fiscal_deficit_ratio: f64,
    /// Maximum fraction of reducible social-security spending displaced
    /// by sufficiently large UBI [0, 1]
    pub social_security_reduction_rate: f64,
    /// η - elasticity of inflation to (total UBI outlay / GDP) [0, 1]
    pub inflation_sensitivity: f64,
    /// λ - elasticity of productivity loss to the corporate tax rate [0, 1]
    pub tax_sensitivity: f64,
}

/// Tax revenue by base, after the calibration factor (trillion yen)
///
/// The four components sum to `adjusted_tax_revenue` within rounding
/// tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    pub personal: f64,
    pub corporate: f64,
    pub consumption: f64,
    pub property: f64,
}

impl RevenueBreakdown {
    /// Sum of the four components (trillion yen)
    pub fn total(&self) -> f64 {
        self.personal + self.corporate + self.consumption + self.property
    }
}

/// Revenue and surplus expressed as percentages of adjusted GDP
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GdpRatios {
    pub total_revenue: f64,
    pub net_surplus: f64,
}

/// Model output, wholly recomputed on every call
///
/// Per-capita figures (`*_ubi`) are in whole yen; aggregate figures are
/// in trillion yen rounded to one decimal; ratios are percentages rounded
/// to one decimal. Rounding is presentation-level only and never feeds
/// back into the computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UbiResult {
    /// Nominal monthly UBI per person (yen)
    pub monthly_ubi: f64,
    /// Nominal annual UBI per person (yen); 12 × monthly within rounding
    pub annual_ubi: f64,
    /// Monthly UBI deflated by induced inflation (yen)
    pub real_monthly_ubi: f64,
    /// Annual UBI deflated by induced inflation (yen)
    pub real_annual_ubi: f64,
    /// GDP after the productivity coefficient and per-capita multiplier
    /// (trillion yen)
    pub adjusted_gdp: f64,
    /// Theoretical tax revenue after the calibration factor (trillion yen)
    pub adjusted_tax_revenue: f64,
    /// New borrowing (trillion yen)
    pub fiscal_deficit: f64,
    /// adjusted_tax_revenue + fiscal_deficit (trillion yen)
    pub total_revenue: f64,
    /// total_revenue minus total government cost (trillion yen); may be
    /// negative
    pub net_surplus: f64,
    pub revenue_breakdown: RevenueBreakdown,
    pub gdp_ratios: GdpRatios,
    /// Induced inflation rate (percent)
    pub inflation_rate: f64,
    /// γ net of the corporate-tax penalty (dimensionless)
    pub productivity_coefficient: f64,
    /// Legacy social-security spending displaced by UBI (trillion yen)
    pub social_security_reduction: f64,
    /// Total UBI outlay across the population (trillion yen)
    pub total_ubi_payment: f64,
}

/// Calibration constants of the reference economy
///
/// These are deliberate literals, not derived quantities: recalibrating
/// the model to another economy or base year means swapping this struct,
/// not touching the formulas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConstants {
    /// Reference GDP (trillion yen)
    pub base_gdp: f64,
    /// Population covered by the payment
    pub population: f64,
    /// Current social-insurance contributions (trillion yen)
    pub social_insurance_amount: f64,
    /// Marginal propensity to consume applied to the consumption tax base
    pub propensity_to_consume: f64,
    /// Taxable asset stock as a multiple of GDP
    pub asset_to_gdp_ratio: f64,
    /// Typical existing annual social-security benefit (yen); caps the
    /// displacement effect once UBI matches the benefit it replaces
    pub average_social_security_benefit: f64,
}

impl ModelConstants {
    /// Japan, 2025 assumptions: GDP 600 trillion yen, population 125
    /// million, social-insurance contributions 82.2 trillion yen, average
    /// social-security benefit about 1 million yen per year.
    pub fn japan_2025() -> Self {
        ModelConstants {
            base_gdp: 600.0,
            population: 125_000_000.0,
            social_insurance_amount: 82.2,
            propensity_to_consume: 0.6,
            asset_to_gdp_ratio: 2.0,
            average_social_security_benefit: 1_000_000.0,
        }
    }
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self::japan_2025()
    }
}
