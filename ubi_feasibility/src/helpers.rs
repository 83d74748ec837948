//! Rounding and display-sanitization helpers
//!
//! The model rounds each result field to its presentation precision:
//! whole yen for per-capita figures, one decimal for trillion-yen
//! aggregates and percentages, three decimals for coefficients. Non-finite
//! intermediates (e.g. ratios over a zero GDP) are normalized to zero at
//! this boundary instead of raising an error. Rounded values never feed
//! back into the computation.

/// Map NaN and infinities to zero
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Round to the nearest whole unit (per-capita yen figures)
pub fn round_whole(value: f64) -> f64 {
    sanitize(value).round()
}

/// Round to one decimal (trillion-yen aggregates, percentages)
pub fn round_tenth(value: f64) -> f64 {
    (sanitize(value) * 10.0).round() / 10.0
}

/// Round to three decimals (coefficients)
pub fn round_thousandth(value: f64) -> f64 {
    (sanitize(value) * 1000.0).round() / 1000.0
}

/// Express `numerator / denominator` as a percentage rounded to one
/// decimal; zero when the ratio is not finite
pub fn percent_tenth(numerator: f64, denominator: f64) -> f64 {
    round_tenth(numerator / denominator * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_passes_finite_values() {
        assert_eq!(sanitize(1.5), 1.5);
        assert_eq!(sanitize(-2.0), -2.0);
        assert_eq!(sanitize(0.0), 0.0);
    }

    #[test]
    fn test_sanitize_zeroes_non_finite() {
        assert_eq!(sanitize(f64::NAN), 0.0);
        assert_eq!(sanitize(f64::INFINITY), 0.0);
        assert_eq!(sanitize(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_round_whole() {
        assert_eq!(round_whole(123_456.4), 123_456.0);
        assert_eq!(round_whole(123_456.5), 123_457.0);
        assert_eq!(round_whole(f64::NAN), 0.0);
    }

    #[test]
    fn test_round_tenth() {
        assert_eq!(round_tenth(40.27), 40.3);
        assert_eq!(round_tenth(-40.27), -40.3);
        assert_eq!(round_tenth(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_round_thousandth() {
        assert_eq!(round_thousandth(1.36799), 1.368);
    }

    #[test]
    fn test_percent_tenth() {
        assert_eq!(percent_tenth(30.0, 600.0), 5.0);
        assert_eq!(percent_tenth(197.04, 609.96), 32.3);
        // 0/0 would be NaN; sanitized to zero
        assert_eq!(percent_tenth(0.0, 0.0), 0.0);
    }
}
