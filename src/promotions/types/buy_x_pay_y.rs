//! Buy X Pay Y Promotion
//!
//! For every complete group of `buy` units the customer pays for `pay` of
//! them. Units are ranked cheapest first across the whole cart, and the
//! `buy - pay` cheapest units per complete group are free.

use crate::{
    discounts::sum_first_cents,
    items::{
        CartLineItem, total_cents,
        units::{cheapest_first, unit_count},
    },
    promotions::{PromotionError, applied::CentsBreakdown},
};

/// A "Buy X Pay Y" promotion (3-for-2, 4-for-3, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuyXPayYPromotion {
    buy: u32,
    pay: u32,
}

impl BuyXPayYPromotion {
    /// Create a new "Buy X Pay Y" promotion.
    ///
    /// # Errors
    ///
    /// - [`PromotionError::InvalidBuyPay`]: `buy` or `pay` is zero.
    /// - [`PromotionError::PayNotLessThanBuy`]: the promotion would never give anything away.
    pub fn new(buy: u32, pay: u32) -> Result<Self, PromotionError> {
        if buy == 0 || pay == 0 {
            return Err(PromotionError::InvalidBuyPay);
        }

        if pay >= buy {
            return Err(PromotionError::PayNotLessThanBuy { buy, pay });
        }

        Ok(Self { buy, pay })
    }

    /// Return the group size
    pub fn buy(&self) -> u32 {
        self.buy
    }

    /// Return the number of paid units per group
    pub fn pay(&self) -> u32 {
        self.pay
    }

    /// Number of free units for a cart holding `units` units.
    pub fn free_units(&self, units: u64) -> u64 {
        let sets = units / u64::from(self.buy);

        sets * u64::from(self.buy - self.pay)
    }

    /// Apply the promotion to the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if any amount cannot be represented in cents.
    pub fn apply(&self, items: &[CartLineItem]) -> Result<CentsBreakdown, PromotionError> {
        let free = self.free_units(unit_count(items));
        let runs = cheapest_first(items)?;

        let discount = sum_first_cents(
            runs.iter().map(|run| (run.cents(), u64::from(run.quantity()))),
            free,
        )
        .ok_or(PromotionError::Overflow)?;

        let total = total_cents(items)?;

        CentsBreakdown::new(total, discount)
    }
}
