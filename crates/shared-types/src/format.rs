//! Price formatting
//!
//! Every number the dashboard shows goes through [`to_fixed`]: round half
//! away from zero on the exact binary value, then print exactly `decimals`
//! digits. `100.005` is stored as `100.00499...` and prints `"100.00"`,
//! while `0.125` is exact and prints `"0.13"`.

use rust_decimal::prelude::*;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

/// Magnitude from which `toFixed` gives up on fixed notation
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Format `value` with exactly `decimals` fractional digits
///
/// Non-finite values print as `NaN`, `Infinity` and `-Infinity`. Magnitudes
/// of `1e21` and above print in shortest exponent form, e.g. `1.5e+21`.
pub fn to_fixed(value: f64, decimals: u32) -> String {
    let precision = decimals as usize;

    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= EXPONENT_THRESHOLD {
        // Exponent is always positive here
        return format!("{value:e}").replacen('e', "e+", 1);
    }

    // Sign is applied after rounding, so tiny negatives print as "-0.00"
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    let digits = match Decimal::from_f64_retain(magnitude) {
        Some(exact) => {
            let rounded =
                exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.precision$}")
        }
        // Unreachable below the exponent threshold
        None => format!("{magnitude:.precision$}"),
    };

    format!("{sign}{digits}")
}

/// Formatting rule for an optional price
///
/// Absent values format to the empty string, never to `"0.00"` or to a bare
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFormat {
    pub prefix: String,
    pub decimals: u32,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self::currency("$")
    }
}

impl PriceFormat {
    pub fn new(prefix: impl Into<String>, decimals: u32) -> Self {
        Self {
            prefix: prefix.into(),
            decimals,
        }
    }

    /// Two decimals with a currency prefix
    pub fn currency(symbol: impl Into<String>) -> Self {
        Self::new(symbol, 2)
    }

    /// Two decimals, no prefix
    pub fn plain() -> Self {
        Self::new("", 2)
    }

    pub fn format(&self, value: f64) -> String {
        format!("{}{}", self.prefix, to_fixed(value, self.decimals))
    }

    /// Format if present, otherwise the empty token
    pub fn display(&self, value: Option<f64>) -> String {
        value.map(|v| self.format(v)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimal_padding() {
        assert_eq!(to_fixed(190.1, 2), "190.10");
        assert_eq!(to_fixed(7.0, 2), "7.00");
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(1234567.891, 2), "1234567.89");
    }

    #[test]
    fn test_rounds_exact_binary_value() {
        // Stored below the midpoint
        assert_eq!(to_fixed(100.005, 2), "100.00");
        assert_eq!(to_fixed(182.345, 2), "182.34");
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(2.675, 2), "2.67");
    }

    #[test]
    fn test_exact_midpoint_rounds_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.375, 2), "0.38");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(to_fixed(-3.14159, 2), "-3.14");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 2), "-Infinity");
        assert_eq!(PriceFormat::currency("$").format(f64::NAN), "$NaN");
    }

    #[test]
    fn test_huge_values_use_exponent_form() {
        assert_eq!(to_fixed(1e21, 2), "1e+21");
        assert_eq!(to_fixed(1.5e21, 2), "1.5e+21");
        assert_eq!(to_fixed(-2.5e30, 2), "-2.5e+30");
        assert_eq!(to_fixed(123456789012345680000000.0, 2), "1.2345678901234569e+23");
        assert_eq!(to_fixed(999999999999999900000.0, 2), "999999999999999868928.00");
    }

    #[test]
    fn test_price_format_absent_is_empty() {
        let format = PriceFormat::currency("$");
        assert_eq!(format.display(None), "");
        assert_eq!(format.display(Some(182.345)), "$182.34");
        assert_eq!(format.display(Some(190.1)), "$190.10");
    }

    #[test]
    fn test_plain_format() {
        let format = PriceFormat::plain();
        assert_eq!(format.display(Some(-1.5)), "-1.50");
        assert_eq!(format.display(None), "");
    }
}
