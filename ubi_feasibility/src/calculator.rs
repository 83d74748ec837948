//! Core UBI feasibility computation
//!
//! A single-period, closed-form-plus-fixed-point estimator: GDP and tax
//! revenue follow directly from the parameters, while the affordable UBI
//! and the social-security cost it displaces depend on each other and are
//! resolved by an iterative equilibrium search. Pure and deterministic;
//! never fails, never validates — out-of-range inputs produce whatever
//! the formulas yield, and non-finite figures are zeroed at the result
//! boundary (see [`crate::helpers`]).

use crate::helpers::{percent_tenth, round_tenth, round_thousandth, round_whole};
use crate::{GdpRatios, ModelConstants, RevenueBreakdown, UbiParameters, UbiResult};

/// Yen per trillion yen, for converting aggregate surplus to per-capita
/// payments
const YEN_PER_TRILLION: f64 = 1e12;

/// Cap on the equilibrium search. The update rule saturates within 2-3
/// iterations for the preset catalog; the cap only guards extreme
/// parameter combinations.
const MAX_FIXED_POINT_ITERATIONS: usize = 32;

/// Convergence tolerance on the social-security cost (trillion yen);
/// 1e-9 trillion yen = 1000 yen aggregate, well below rounding precision
const FIXED_POINT_TOLERANCE: f64 = 1e-9;

/// Estimate the feasible UBI for the reference economy
/// ([`ModelConstants::japan_2025`]).
pub fn calculate_ubi(params: &UbiParameters) -> UbiResult {
    calculate_ubi_with(params, &ModelConstants::japan_2025())
}

/// Estimate the feasible UBI under explicit calibration constants.
pub fn calculate_ubi_with(params: &UbiParameters, constants: &ModelConstants) -> UbiResult {
    // Corporate taxation dampens the AI productivity multiplier:
    // γ_eff = γ × (1 - λ · t_corporate)
    let productivity_coefficient =
        params.gamma * (1.0 - params.tax_sensitivity * params.tax_corporate);

    let gdp = constants.base_gdp * params.gdp_per_capita_multiplier * productivity_coefficient;

    // Complementary income slices: capital absorbs the AI-displaced share
    // plus the capital-captured share of what remains with labor
    let labor_share = 1.0 - params.alpha;
    let labor_income = gdp * labor_share * (1.0 - params.beta);
    let capital_income = gdp * (params.alpha + labor_share * params.beta);

    let revenue_personal = labor_income * params.tax_personal;
    let revenue_corporate = capital_income * params.tax_corporate;
    let revenue_consumption = gdp * constants.propensity_to_consume * params.tax_consumption;
    let revenue_property = gdp * constants.asset_to_gdp_ratio * params.tax_property;

    let theoretical_revenue =
        revenue_personal + revenue_corporate + revenue_consumption + revenue_property;
    let adjusted_tax_revenue = theoretical_revenue * params.tax_adjustment_factor;

    let fiscal_deficit = gdp * params.fiscal_deficit_ratio;
    let total_revenue = adjusted_tax_revenue + fiscal_deficit;

    // Government spending immune to UBI-driven reduction
    let fixed_cost = gdp * params.fixed_cost_ratio;

    // Social-insurance contributions not left on citizens must be
    // financed from tax revenue
    let social_insurance_from_tax = constants.social_insurance_amount
        * params.gdp_per_capita_multiplier
        * (1.0 - params.social_insurance_ratio);

    // The reducible legacy social-security base
    let base_social_security_cost = gdp * (params.social_cost_ratio - params.fixed_cost_ratio);

    // Equilibrium search for the mutual dependency: larger UBI displaces
    // more social-security spending, which enlarges the surplus, which
    // enlarges the UBI. Same update rule each pass; iterate until the
    // social-security cost settles.
    let mut social_security_cost = base_social_security_cost;
    let mut annual_ubi_per_person = 0.0;
    let mut net_surplus = 0.0;

    for _ in 0..MAX_FIXED_POINT_ITERATIONS {
        let total_cost = fixed_cost + social_security_cost + social_insurance_from_tax;
        net_surplus = total_revenue - total_cost;

        // A deficit never yields a negative payment
        annual_ubi_per_person = if net_surplus > 0.0 {
            net_surplus * YEN_PER_TRILLION / constants.population
        } else {
            0.0
        };

        // Displacement saturates once UBI matches the benefit it replaces
        let reduction_factor =
            (annual_ubi_per_person / constants.average_social_security_benefit).min(1.0);
        let actual_reduction_rate = reduction_factor * params.social_security_reduction_rate;
        let next_cost = base_social_security_cost * (1.0 - actual_reduction_rate);

        let settled = (next_cost - social_security_cost).abs() < FIXED_POINT_TOLERANCE;
        social_security_cost = next_cost;
        if settled {
            break;
        }
    }
    let monthly_ubi_per_person = annual_ubi_per_person / 12.0;

    // Linear Phillips-curve-like approximation: π = η · (total UBI / GDP)
    let total_ubi_payment = annual_ubi_per_person * constants.population / YEN_PER_TRILLION;
    let inflation_rate = params.inflation_sensitivity * (total_ubi_payment / gdp);

    let real_annual_ubi = annual_ubi_per_person / (1.0 + inflation_rate);
    let real_monthly_ubi = real_annual_ubi / 12.0;

    let social_security_reduction = base_social_security_cost - social_security_cost;

    UbiResult {
        monthly_ubi: round_whole(monthly_ubi_per_person),
        annual_ubi: round_whole(annual_ubi_per_person),
        real_monthly_ubi: round_whole(real_monthly_ubi),
        real_annual_ubi: round_whole(real_annual_ubi),
        adjusted_gdp: round_tenth(gdp),
        adjusted_tax_revenue: round_tenth(adjusted_tax_revenue),
        fiscal_deficit: round_tenth(fiscal_deficit),
        total_revenue: round_tenth(total_revenue),
        net_surplus: round_tenth(net_surplus),
        // Each component scaled by the calibration factor so the
        // sum-of-parts invariant holds against adjusted_tax_revenue
        revenue_breakdown: RevenueBreakdown {
            personal: round_tenth(revenue_personal * params.tax_adjustment_factor),
            corporate: round_tenth(revenue_corporate * params.tax_adjustment_factor),
            consumption: round_tenth(revenue_consumption * params.tax_adjustment_factor),
            property: round_tenth(revenue_property * params.tax_adjustment_factor),
        },
        gdp_ratios: GdpRatios {
            total_revenue: percent_tenth(total_revenue, gdp),
            net_surplus: percent_tenth(net_surplus, gdp),
        },
        inflation_rate: round_tenth(inflation_rate * 100.0),
        productivity_coefficient: round_thousandth(productivity_coefficient),
        social_security_reduction: round_tenth(social_security_reduction),
        total_ubi_payment: round_tenth(total_ubi_payment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::Scenario;
    use approx::assert_relative_eq;

    #[test]
    fn test_productivity_coefficient_penalized_by_corporate_tax() {
        let mut params = Scenario::moderate().params;
        params.gamma = 1.5;
        params.tax_sensitivity = 0.3;
        params.tax_corporate = 0.5;

        let result = calculate_ubi(&params);
        // 1.5 × (1 - 0.3 × 0.5) = 1.275
        assert_relative_eq!(result.productivity_coefficient, 1.275, epsilon = 1e-9);
    }

    #[test]
    fn test_income_slices_are_complementary() {
        // labor × (1-β) income plus capital income spans GDP: taxing both
        // at 100% with no adjustment captures labor(1-β) + capital shares
        let params = UbiParameters {
            alpha: 0.4,
            beta: 0.3,
            gamma: 1.0,
            tax_personal: 1.0,
            tax_corporate: 1.0,
            tax_consumption: 0.0,
            tax_property: 0.0,
            social_cost_ratio: 0.0,
            fixed_cost_ratio: 0.0,
            gdp_per_capita_multiplier: 1.0,
            social_insurance_ratio: 1.0,
            tax_adjustment_factor: 1.0,
            fiscal_deficit_ratio: 0.0,
            social_security_reduction_rate: 0.0,
            inflation_sensitivity: 0.0,
            tax_sensitivity: 0.0,
        };
        let result = calculate_ubi(&params);

        // (1-α)(1-β) + (α + (1-α)β) = 1, so personal + corporate = GDP
        let captured = result.revenue_breakdown.personal + result.revenue_breakdown.corporate;
        assert_relative_eq!(captured, result.adjusted_gdp, epsilon = 0.2);
    }

    #[test]
    fn test_fixed_point_settles_for_all_presets() {
        // The equilibrium value must be a fixed point of the update rule:
        // re-deriving the reduction from the reported annual UBI
        // reproduces the reported social-security reduction
        for scenario in Scenario::all_scenarios() {
            let constants = ModelConstants::japan_2025();
            let result = calculate_ubi(&scenario.params);

            let base_cost = result.adjusted_gdp
                * (scenario.params.social_cost_ratio - scenario.params.fixed_cost_ratio);
            let reduction_factor =
                (result.annual_ubi / constants.average_social_security_benefit).min(1.0);
            let expected_reduction =
                base_cost * reduction_factor * scenario.params.social_security_reduction_rate;

            assert_relative_eq!(
                result.social_security_reduction,
                expected_reduction,
                epsilon = 0.5
            );
        }
    }

    #[test]
    fn test_no_surplus_means_no_reduction() {
        // The current scenario runs a deficit: UBI is zero and no legacy
        // spending is displaced
        let result = calculate_ubi(&Scenario::current().params);
        assert_eq!(result.annual_ubi, 0.0);
        assert_eq!(result.social_security_reduction, 0.0);
        assert!(result.net_surplus < 0.0);
    }

    #[test]
    fn test_inflation_follows_ubi_outlay() {
        let result = calculate_ubi(&Scenario::proposed().params);

        // π = η × (total UBI / GDP), reported as a percentage
        let expected = 0.2 * (result.total_ubi_payment / result.adjusted_gdp) * 100.0;
        assert_relative_eq!(result.inflation_rate, expected, epsilon = 0.1);
        assert!(result.real_annual_ubi < result.annual_ubi);
    }

    #[test]
    fn test_custom_constants_scale_the_economy() {
        let params = Scenario::proposed().params;
        let mut constants = ModelConstants::japan_2025();
        constants.base_gdp *= 2.0;

        let baseline = calculate_ubi(&params);
        let doubled = calculate_ubi_with(&params, &constants);

        assert_relative_eq!(doubled.adjusted_gdp, baseline.adjusted_gdp * 2.0, epsilon = 0.2);
        assert!(doubled.monthly_ubi > baseline.monthly_ubi);
    }
}
