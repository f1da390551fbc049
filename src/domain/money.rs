use crate::error::{Result, VendingError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` half-up to `places` decimal places.
///
/// Midpoints round away from zero, so `2.005` becomes `2.01` rather than the
/// banker's `2.00`.
pub fn round(value: Decimal, places: i32) -> Result<Decimal> {
    let places = u32::try_from(places).map_err(|_| {
        VendingError::InvalidArgument(format!("decimal places must not be negative, got {places}"))
    })?;
    Ok(value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
}

/// Converts a currency amount to a whole number of pennies, rounding half-up
/// to cents first.
pub fn to_pennies(amount: Decimal) -> Result<i64> {
    round(amount, 2)?
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_i64())
        .ok_or_else(|| {
            VendingError::InvalidArgument(format!("{amount} is too large to express in pennies"))
        })
}
