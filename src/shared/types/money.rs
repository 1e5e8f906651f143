//! Fixed-point money helpers

use rust_decimal::{Decimal, RoundingStrategy};

/// Fraction digits carried by every unit price and computed amount.
pub const MONEY_SCALE: u32 = 2;

/// Largest unit price a `DECIMAL(10, 2)` column holds: 99,999,999.99.
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, MONEY_SCALE);

/// Normalize a decimal to exactly two fraction digits.
///
/// Values with more precision are rounded half away from zero, which is what
/// a `DECIMAL(10, 2)` column does on insert.
pub fn to_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}
