//! Line pricing and order aggregation.
//!
//! Pure arithmetic over validated [`OrderLine`]s. The discount factor is
//! rounded to 4 digits before applying; the line total is rounded to 2
//! digits. Order totals accumulate unrounded component sums in line order
//! and round each component exactly once at the end, so totals do not drift
//! with the number of lines.

use rust_decimal::Decimal;

use salesdesk_core::money::{round2, round4};

use crate::order::OrderLine;

/// Priced amounts for a single line.
///
/// `subtotal` and `discount` retain full precision internally for
/// aggregation; the accessors round to 2 digits for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineAmounts {
    subtotal: Decimal,
    total: Decimal,
}

impl LineAmounts {
    /// Undiscounted `unit_price * quantity`, rounded for reporting.
    pub fn subtotal(&self) -> Decimal {
        round2(self.subtotal)
    }

    /// `subtotal - total`, rounded for reporting. Never negative.
    pub fn discount(&self) -> Decimal {
        self.subtotal() - self.total
    }

    /// Discounted line total, always 2 fractional digits.
    pub fn total(&self) -> Decimal {
        self.total
    }

    fn raw_subtotal(&self) -> Decimal {
        self.subtotal
    }
}

/// Compute a line's amounts:
/// `total = round2(unit_price * quantity * (1 - round4(discount_pct / 100)))`.
pub fn price_line(line: &OrderLine) -> LineAmounts {
    let gross = line.unit_price() * Decimal::from(line.quantity());
    let discount_factor = Decimal::ONE - round4(line.discount_pct() / Decimal::ONE_HUNDRED);

    LineAmounts {
        subtotal: gross,
        total: round2(gross * discount_factor),
    }
}

/// Order-level component sums, each rounded to 2 digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub discount_total: Decimal,
    pub total: Decimal,
}

impl OrderTotals {
    pub const ZERO: Self = Self {
        subtotal: Decimal::ZERO,
        discount_total: Decimal::ZERO,
        total: Decimal::ZERO,
    };
}

/// Sum line amounts in insertion order. Empty input yields all-zero totals.
pub fn aggregate(amounts: &[LineAmounts]) -> OrderTotals {
    let mut subtotal = Decimal::ZERO;
    let mut discount_total = Decimal::ZERO;
    let mut total = Decimal::ZERO;

    for line in amounts {
        subtotal += line.raw_subtotal();
        discount_total += line.raw_subtotal() - line.total();
        total += line.total();
    }

    OrderTotals {
        subtotal: round2(subtotal),
        discount_total: round2(discount_total),
        total: round2(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use salesdesk_core::EntityId;
    use salesdesk_products::ProductId;

    fn line(quantity: u32, unit_price: Decimal, discount_pct: Decimal) -> OrderLine {
        OrderLine::new(ProductId::new(EntityId::new()), quantity, unit_price, discount_pct)
            .unwrap()
    }

    #[test]
    fn undiscounted_line_totals_plain_product() {
        let amounts = price_line(&line(2, dec!(25.00), dec!(0)));
        assert_eq!(amounts.total(), dec!(50.00));
        assert_eq!(amounts.subtotal(), dec!(50.00));
        assert_eq!(amounts.discount(), dec!(0.00));
    }

    #[test]
    fn ten_percent_discount_scenario() {
        let amounts = price_line(&line(1, dec!(8.50), dec!(10)));
        assert_eq!(amounts.total(), dec!(7.65));
        assert_eq!(amounts.subtotal(), dec!(8.50));
        assert_eq!(amounts.discount(), dec!(0.85));
    }

    #[test]
    fn line_total_rounds_half_up() {
        // 10.01 * 0.5 = 5.005 -> 5.01
        let amounts = price_line(&line(1, dec!(10.01), dec!(50)));
        assert_eq!(amounts.total(), dec!(5.01));
    }

    #[test]
    fn discount_factor_keeps_four_digits() {
        // 33.333% -> factor 1 - 0.3333 = 0.6667; 100 * 0.6667 = 66.67
        let amounts = price_line(&line(1, dec!(100.00), dec!(33.333)));
        assert_eq!(amounts.total(), dec!(66.67));
    }

    #[test]
    fn full_discount_yields_zero_total() {
        let amounts = price_line(&line(3, dec!(19.99), dec!(100)));
        assert_eq!(amounts.total(), dec!(0.00));
        assert_eq!(amounts.discount(), amounts.subtotal());
    }

    #[test]
    fn aggregate_matches_reference_scenario() {
        // [(qty 2, 25.00, 0%), (qty 1, 8.50, 10%)]
        let amounts = vec![
            price_line(&line(2, dec!(25.00), dec!(0))),
            price_line(&line(1, dec!(8.50), dec!(10))),
        ];
        let totals = aggregate(&amounts);
        assert_eq!(totals.subtotal, dec!(58.50));
        assert_eq!(totals.discount_total, dec!(0.85));
        assert_eq!(totals.total, dec!(57.65));
    }

    #[test]
    fn aggregate_of_empty_input_is_zero() {
        let totals = aggregate(&[]);
        assert_eq!(totals, OrderTotals::ZERO);
    }

    #[test]
    fn aggregation_is_deterministic_for_a_fixed_sequence() {
        let amounts: Vec<_> = (1..=7u32)
            .map(|q| price_line(&line(q, dec!(3.33), dec!(12.5))))
            .collect();
        assert_eq!(aggregate(&amounts), aggregate(&amounts));
    }

    proptest! {
        #[test]
        fn line_total_never_exceeds_subtotal(
            quantity in 1u32..1_000,
            price_cents in 0i64..1_000_000,
            discount_bp in 0i64..=10_000,
        ) {
            let unit_price = Decimal::new(price_cents, 2);
            let discount_pct = Decimal::new(discount_bp, 2);
            let amounts = price_line(&line(quantity, unit_price, discount_pct));

            prop_assert!(amounts.total() <= amounts.subtotal());
            prop_assert!(amounts.discount() >= Decimal::ZERO);
            // 2-digit rounding is idempotent on the exposed total.
            prop_assert_eq!(round2(amounts.total()), amounts.total());
        }
    }
}
