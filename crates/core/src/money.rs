//! Monetary normalization between minor units and display amounts.
//!
//! The integer minor-unit count (pence for GBP) is the authoritative value;
//! decimal display amounts are derived from it and never trusted on write
//! paths. Caller-supplied decimals are converted at the boundary, before
//! they reach the persistence gateway.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Currency code applied when a claim arrives without one.
pub const HOME_CURRENCY: &str = "GBP";

/// Decimal places in a display amount.
const DISPLAY_SCALE: u32 = 2;

/// Derive the two-decimal display amount for a minor-unit count.
pub fn display_amount(amount_minor: i64) -> Decimal {
    Decimal::new(amount_minor, DISPLAY_SCALE)
}

/// Convert a caller-supplied decimal amount to minor units.
///
/// Rounds half away from zero at two decimal places before scaling, so
/// `10.005` becomes `1001`. Returns `None` when the scaled value does not
/// fit in an `i64`.
pub fn minor_units(amount: Decimal) -> Option<i64> {
    amount
        .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(Decimal::ONE_HUNDRED)?
        .to_i64()
}

/// Normalize a currency code: trimmed, defaulting to [`HOME_CURRENCY`] when
/// blank or missing. The code is a label; no conversion is performed.
pub fn normalize_currency(currency: Option<&str>) -> String {
    match currency.map(str::trim) {
        Some(code) if !code.is_empty() => code.to_string(),
        _ => HOME_CURRENCY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn display_amount_is_two_decimal_places() {
        assert_eq!(display_amount(2540), dec("25.40"));
        assert_eq!(display_amount(799), dec("7.99"));
        assert_eq!(display_amount(1), dec("0.01"));
        assert_eq!(display_amount(100), dec("1.00"));
    }

    #[test]
    fn minor_units_round_trip() {
        for m in [1i64, 5, 99, 100, 101, 799, 1425, 2540, 123_456_789] {
            assert_eq!(minor_units(display_amount(m)), Some(m));
        }
        for m in 1..=5_000i64 {
            assert_eq!(minor_units(display_amount(m)), Some(m));
        }
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(minor_units(dec("10.005")), Some(1001));
        assert_eq!(minor_units(dec("10.004")), Some(1000));
        assert_eq!(minor_units(dec("10.0049")), Some(1000));
        assert_eq!(minor_units(dec("-10.005")), Some(-1001));
        assert_eq!(minor_units(dec("0.005")), Some(1));
    }

    #[test]
    fn minor_units_overflow_is_none() {
        assert_eq!(minor_units(Decimal::MAX), None);
    }

    #[test]
    fn currency_defaults_when_blank_or_missing() {
        assert_eq!(normalize_currency(None), "GBP");
        assert_eq!(normalize_currency(Some("")), "GBP");
        assert_eq!(normalize_currency(Some("   ")), "GBP");
        assert_eq!(normalize_currency(Some("USD")), "USD");
        assert_eq!(normalize_currency(Some("  EUR ")), "EUR");
    }
}
