//! Items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::{CentsError, to_cents};

pub mod units;

/// Errors related to cart line validation.
#[derive(Debug, Error, PartialEq)]
pub enum CartItemError {
    /// Line has no product reference (line index).
    #[error("Cart item {0} must have a productId")]
    MissingProductId(usize),

    /// Line has a negative unit price (line index, price).
    #[error("Cart item {0} has price {1}; price must be greater than or equal to 0")]
    NegativePrice(usize, Decimal),

    /// Line has a zero quantity (line index).
    #[error("Cart item {0} must have a quantity greater than 0")]
    ZeroQuantity(usize),

    /// Wrapped cents conversion error.
    #[error(transparent)]
    Cents(#[from] CentsError),
}

/// A product reference with unit price and quantity, as supplied by the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    product_id: String,
    price: Decimal,
    quantity: u32,
}

impl CartLineItem {
    /// Creates a new cart line.
    pub fn new(product_id: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            price,
            quantity,
        }
    }

    /// Returns the product reference.
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Returns the unit price.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the number of units on this line.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price in cents.
    ///
    /// # Errors
    ///
    /// Returns a [`CentsError`] if the price cannot be represented in cents.
    pub fn unit_cents(&self) -> Result<i64, CentsError> {
        to_cents(self.price)
    }

    /// Line total in cents (`unit cents * quantity`).
    ///
    /// # Errors
    ///
    /// Returns a [`CentsError`] if the price or the product overflows.
    pub fn line_cents(&self) -> Result<i64, CentsError> {
        self.unit_cents()?
            .checked_mul(i64::from(self.quantity))
            .ok_or(CentsError::Overflow(self.price))
    }

    /// Validate this line, reporting failures against `index`.
    ///
    /// # Errors
    ///
    /// Returns a [`CartItemError`] describing the first failed check.
    pub fn validate(&self, index: usize) -> Result<(), CartItemError> {
        if self.product_id.trim().is_empty() {
            return Err(CartItemError::MissingProductId(index));
        }

        if self.price < Decimal::ZERO {
            return Err(CartItemError::NegativePrice(index, self.price));
        }

        if self.quantity == 0 {
            return Err(CartItemError::ZeroQuantity(index));
        }

        self.line_cents()?;

        Ok(())
    }
}

/// Validate every line of a cart.
///
/// # Errors
///
/// Returns the [`CartItemError`] of the first invalid line.
pub fn validate_cart(items: &[CartLineItem]) -> Result<(), CartItemError> {
    items
        .iter()
        .enumerate()
        .try_for_each(|(index, item)| item.validate(index))
}

/// Nominal cart total in cents, before any promotion.
///
/// # Errors
///
/// Returns a [`CentsError`] if any line or the running sum overflows.
pub fn total_cents(items: &[CartLineItem]) -> Result<i64, CentsError> {
    items.iter().try_fold(0_i64, |acc, item| {
        let line = item.line_cents()?;

        acc.checked_add(line).ok_or(CentsError::Overflow(item.price))
    })
}
