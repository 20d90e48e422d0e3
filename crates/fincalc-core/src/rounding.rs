//! Decimal rounding of float results.
//!
//! Results are rounded half-to-even on the exact binary value of the `f64`,
//! so `2.675` (stored as `2.67499999...`) rounds down to `2.67`.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` to `dp` decimal places, ties to even.
///
/// Values that cannot be represented as a `Decimal` (non-finite or beyond
/// its range) are returned unchanged.
#[must_use]
pub fn round_half_even(value: f64, dp: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .or_else(|| Decimal::from_f64(value))
        .and_then(|d| {
            d.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
                .to_f64()
        })
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_money() {
        assert_eq!(round_half_even(19671.5133, 2), 19671.51);
        assert_eq!(round_half_even(1432.2458, 2), 1432.25);
    }

    #[test]
    fn test_exact_binary_value() {
        // 2.675 is stored just below the midpoint.
        assert_eq!(round_half_even(2.675, 2), 2.67);
        // 0.125 is exact, tie goes to even.
        assert_eq!(round_half_even(0.125, 2), 0.12);
        assert_eq!(round_half_even(0.375, 2), 0.38);
    }

    #[test]
    fn test_round_rate() {
        assert_eq!(round_half_even(0.056_641_234, 6), 0.056_641);
        assert_eq!(round_half_even(-0.5, 0), -0.0);
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(round_half_even(f64::NAN, 2).is_nan());
        assert_eq!(round_half_even(f64::INFINITY, 2), f64::INFINITY);
    }
}
