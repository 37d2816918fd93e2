//! Money
//!
//! Conversions between display amounts and integer cents. Every discount is
//! calculated in cents; decimals only appear at the edges.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use thiserror::Error;

/// Errors converting between amounts and cents.
#[derive(Debug, Error, PartialEq)]
pub enum CentsError {
    /// The amount cannot be represented as a whole number of cents.
    #[error("amount {0} cannot be represented in cents")]
    Overflow(Decimal),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Convert an amount to whole cents, rounding half-cents away from zero.
///
/// # Errors
///
/// Returns [`CentsError::Overflow`] if the amount does not fit in an `i64` once
/// scaled to cents.
pub fn to_cents(amount: Decimal) -> Result<i64, CentsError> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_i64())
        .ok_or(CentsError::Overflow(amount))
}

/// Convert cents back to a decimal amount.
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Wrap cents in a currency for display.
pub fn to_money(cents: i64, currency: &'static Currency) -> Money<'static, Currency> {
    Money::from_minor(cents, currency)
}

/// Look up a supported currency by its ISO code.
///
/// # Errors
///
/// Returns [`CentsError::UnknownCurrency`] for codes other than `USD`, `GBP` and `EUR`.
pub fn currency(code: &str) -> Result<&'static Currency, CentsError> {
    match code.trim().to_ascii_uppercase().as_str() {
        "USD" => Ok(USD),
        "GBP" => Ok(GBP),
        "EUR" => Ok(EUR),
        _ => Err(CentsError::UnknownCurrency(code.to_string())),
    }
}
