//! Monetary types and fixed-digit formatting.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Amount represented as a Decimal for precision.
pub type Amount = Decimal;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Fractional digits shown for converted amounts.
pub const CONVERSION_DIGITS: u32 = 8;

/// Fractional digits shown for slider-derived amounts.
pub const PERCENTAGE_DIGITS: u32 = 2;

/// Round half away from zero and pad to exactly `digits` fractional digits.
///
/// The returned value's scale equals `digits`, so `to_string()` prints
/// trailing zeros (`43000` becomes `43000.00000000` for 8 digits). Returns
/// `None` when the integer part is too wide to carry `digits` fractional
/// digits in 96 bits.
#[must_use]
pub fn to_fixed(value: Decimal, digits: u32) -> Option<Decimal> {
    let mut rounded = value.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(digits);
    (rounded.scale() == digits).then_some(rounded)
}

/// Parse a user-entered number, keeping the scale as typed.
///
/// Returns `None` for blank or non-numeric input.
#[must_use]
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// Lenient parse: blank or non-numeric input counts as zero.
#[must_use]
pub fn parse_or_zero(input: &str) -> Amount {
    parse_amount(input).unwrap_or_default()
}

/// Parse a user-entered number that must be strictly positive.
#[must_use]
pub fn parse_positive(input: &str) -> Option<Decimal> {
    parse_amount(input).filter(|value| *value > Decimal::ZERO)
}

/// Derive an amount from a slider percentage of the available balance.
///
/// `balance * percentage / 100`, rounded to two fractional digits. The
/// percentage is not clamped here; the slider bounds it. `None` when the
/// product does not fit a `Decimal`.
///
/// ```
/// use bridge_exchange::domain::amount_from_percentage;
/// use rust_decimal_macros::dec;
///
/// let amount = amount_from_percentage(dec!(50), dec!(1000)).unwrap();
/// assert_eq!(amount.to_string(), "500.00");
/// ```
#[must_use]
pub fn amount_from_percentage(percentage: Decimal, available_balance: Decimal) -> Option<Amount> {
    let scaled = available_balance.checked_mul(percentage)? / Decimal::ONE_HUNDRED;
    to_fixed(scaled, PERCENTAGE_DIGITS)
}
