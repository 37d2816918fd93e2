//! Discounts
//!
//! Discount arithmetic shared by promotion types.

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use thiserror::Error;

/// Errors specific to discount calculations.
#[derive(Debug, Error, PartialEq)]
pub enum DiscountError {
    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,
}

/// Calculate `percent` of an amount in cents, rounding half-cents away from zero.
///
/// # Errors
///
/// Returns [`DiscountError::PercentConversion`] if the calculation overflows.
pub fn percent_of_cents(percent: &Percentage, cents: i64) -> Result<i64, DiscountError> {
    let cents = Decimal::from_i64(cents).ok_or(DiscountError::PercentConversion)?;

    ((*percent) * Decimal::ONE) // decimal_percentage doesn't expose the underlying Decimal
        .checked_mul(cents)
        .ok_or(DiscountError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(DiscountError::PercentConversion)
}

/// Sum of the first `count` unit prices, in cents, over runs of `(unit cents, quantity)`.
///
/// Returns `None` on overflow.
pub fn sum_first_cents(runs: impl IntoIterator<Item = (i64, u64)>, count: u64) -> Option<i64> {
    let mut remaining = count;
    let mut sum = 0_i64;

    for (cents, quantity) in runs {
        if remaining == 0 {
            break;
        }

        let taken = remaining.min(quantity);

        sum = sum.checked_add(cents.checked_mul(i64::try_from(taken).ok()?)?)?;
        remaining -= taken;
    }

    Some(sum)
}
