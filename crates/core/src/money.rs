//! Fixed-point monetary rounding.
//!
//! Amounts are `rust_decimal::Decimal`. Intermediate products (discount
//! factors, per-line accumulations) keep at least 4 fractional digits;
//! anything crossing a presentation boundary is rounded to 2 digits with
//! ties going away from zero (1.005 -> 1.01).

use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits of presented monetary amounts.
pub const MONEY_SCALE: u32 = 2;

/// Fractional digits kept for intermediate factors (discount factor).
pub const FACTOR_SCALE: u32 = 4;

/// Round to 2 fractional digits, ties away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to 4 fractional digits, ties away from zero.
pub fn round4(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(FACTOR_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn round2_ties_go_away_from_zero() {
        assert_eq!(round2(dec!(1.005)), dec!(1.01));
        assert_eq!(round2(dec!(2.675)), dec!(2.68));
        assert_eq!(round2(dec!(-1.005)), dec!(-1.01));
    }

    #[test]
    fn round2_keeps_exact_values() {
        assert_eq!(round2(dec!(57.65)), dec!(57.65));
        assert_eq!(round2(dec!(0)), dec!(0));
    }

    #[test]
    fn round2_is_idempotent() {
        let once = round2(dec!(7.12345));
        assert_eq!(round2(once), once);
    }

    #[test]
    fn round4_keeps_four_digits() {
        assert_eq!(round4(dec!(0.12345)), dec!(0.1235));
        assert_eq!(round4(dec!(0.10)), dec!(0.10));
    }
}
