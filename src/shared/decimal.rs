//! Conversions between base-unit integer amounts and display decimals.
//!
//! Token amounts travel through the pricing engine as unsigned integers in
//! base units; rates and prices are `rust_decimal::Decimal` values scaled
//! by each token's display-decimal exponent.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Interpret a base-unit amount as a display-decimal value.
pub fn from_base_units(amount: u64, decimals: u8) -> Decimal {
    Decimal::from_i128_with_scale(amount as i128, decimals as u32)
}

/// Convert a display-decimal value back to base units, flooring.
///
/// Returns `None` for negative values or values that do not fit in 64 bits;
/// callers treat that as a degenerate result, not a fault.
pub fn to_base_units(value: Decimal, decimals: u8) -> Option<u64> {
    if value.is_sign_negative() {
        return None;
    }
    let scale = Decimal::from(10u64.pow(decimals as u32));
    value.checked_mul(scale)?.trunc().to_u64()
}

/// Round to the token's display-decimal count, half away from zero.
pub fn round_to_decimals(value: Decimal, decimals: u8) -> Decimal {
    value.round_dp_with_strategy(decimals as u32, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn base_unit_round_trips() {
        assert_eq!(from_base_units(1_500_000, 6), dec!(1.5));
        assert_eq!(from_base_units(0, 9), Decimal::ZERO);
        assert_eq!(to_base_units(dec!(1.5), 6), Some(1_500_000));
        assert_eq!(to_base_units(dec!(0.0000019), 6), Some(1));
    }

    #[test]
    fn to_base_units_floors() {
        assert_eq!(to_base_units(dec!(1.2345678), 6), Some(1_234_567));
    }

    #[test]
    fn to_base_units_rejects_negative() {
        assert_eq!(to_base_units(dec!(-1), 6), None);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_to_decimals(dec!(0.1234565), 6), dec!(0.123457));
        assert_eq!(round_to_decimals(dec!(0.1234564), 6), dec!(0.123456));
    }
}
