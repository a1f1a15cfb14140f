//! Currency rendering.
//!
//! Monetary amounts are `rust_decimal::Decimal` everywhere in the domain, so
//! cent rounding is exact rather than subject to binary-float drift.

use rust_decimal::{Decimal, RoundingStrategy};

/// Render a monetary amount as a dollar string, e.g. `$19.99` or `-$5.00`.
///
/// Total function: never fails for negative, zero, or fractional-cent input.
/// Rounding policy: **half away from zero** at the cent, so `19.995` renders
/// as `$20.00` and `-0.005` as `-$0.01`.
pub fn format_currency(amount: Decimal) -> String {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if cents.is_sign_negative() && !cents.is_zero() {
        format!("-${:.2}", cents.abs())
    } else {
        format!("${:.2}", cents.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_renders_with_symbol_and_cents() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
    }

    #[test]
    fn negative_amounts_put_the_sign_before_the_symbol() {
        assert_eq!(format_currency(dec!(-5)), "-$5.00");
    }

    #[test]
    fn midpoint_rounds_away_from_zero() {
        assert_eq!(format_currency(dec!(19.995)), "$20.00");
        assert_eq!(format_currency(dec!(-0.005)), "-$0.01");
    }

    #[test]
    fn below_midpoint_rounds_down() {
        assert_eq!(format_currency(dec!(19.994)), "$19.99");
    }

    #[test]
    fn negative_fraction_that_rounds_to_zero_loses_its_sign() {
        assert_eq!(format_currency(dec!(-0.004)), "$0.00");
    }

    #[test]
    fn whole_amounts_are_padded_to_two_decimals() {
        assert_eq!(format_currency(dec!(1234)), "$1234.00");
    }
}
