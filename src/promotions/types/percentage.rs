//! Percentage Promotion
//!
//! A percentage discount on the nominal total of every item in the cart.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::{
    discounts::percent_of_cents,
    items::{CartLineItem, total_cents},
    promotions::{PromotionError, applied::CentsBreakdown},
};

/// A percentage discount promotion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentagePromotion {
    points: Decimal,
    percent: Percentage,
}

impl PercentagePromotion {
    /// Create a new percentage promotion from percentage points (`15` is 15%).
    ///
    /// # Errors
    ///
    /// Returns [`PromotionError::InvalidPercentage`] unless `0 < points <= 100`.
    pub fn new(points: Decimal) -> Result<Self, PromotionError> {
        if points <= Decimal::ZERO || points > Decimal::ONE_HUNDRED {
            return Err(PromotionError::InvalidPercentage);
        }

        Ok(Self {
            points,
            percent: Percentage::from(points / Decimal::ONE_HUNDRED),
        })
    }

    /// Return the discount in percentage points
    pub fn points(&self) -> Decimal {
        self.points
    }

    /// Return the discount as a fraction
    pub fn percent(&self) -> Percentage {
        self.percent
    }

    /// Apply the discount to the cart total.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart total or the discount cannot be represented in cents.
    pub fn apply(&self, items: &[CartLineItem]) -> Result<CentsBreakdown, PromotionError> {
        let total = total_cents(items)?;
        let discount = percent_of_cents(&self.percent, total)?;

        CentsBreakdown::new(total, discount)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_accepts_bounds() -> TestResult {
        let full = PercentagePromotion::new(Decimal::ONE_HUNDRED)?;
        let tiny = PercentagePromotion::new(Decimal::new(1, 2))?;

        assert_eq!(full.points(), Decimal::ONE_HUNDRED);
        assert_eq!(full.percent(), Percentage::from(Decimal::ONE));
        assert_eq!(tiny.points(), Decimal::new(1, 2));

        Ok(())
    }

    #[test]
    fn new_rejects_out_of_range() {
        for points in [
            Decimal::ZERO,
            Decimal::from(-5),
            Decimal::from(150),
            Decimal::new(10_001, 2),
        ] {
            assert_eq!(
                PercentagePromotion::new(points),
                Err(PromotionError::InvalidPercentage),
                "{points} should be rejected"
            );
        }
    }

    #[test]
    fn apply_discounts_cart_total() -> TestResult {
        let promotion = PercentagePromotion::new(Decimal::from(10))?;
        let items = [
            CartLineItem::new("prod-001", Decimal::from(30), 2),
            CartLineItem::new("prod-002", Decimal::from(20), 1),
        ];

        let cents = promotion.apply(&items)?;

        assert_eq!(cents.total(), 8000);
        assert_eq!(cents.discount(), 800);
        assert_eq!(cents.subtotal(), 7200);

        Ok(())
    }

    #[test]
    fn apply_rounds_discount_to_nearest_cent() -> TestResult {
        let promotion = PercentagePromotion::new(Decimal::from(15))?;
        let items = [CartLineItem::new("prod-001", Decimal::new(3599, 2), 1)];

        let cents = promotion.apply(&items)?;

        // 15% of 3599 is 539.85
        assert_eq!(cents.discount(), 540);
        assert_eq!(cents.subtotal(), 3059);

        Ok(())
    }

    #[test]
    fn apply_to_empty_cart_is_zero() -> TestResult {
        let promotion = PercentagePromotion::new(Decimal::from(10))?;

        assert_eq!(promotion.apply(&[])?, CentsBreakdown::default());

        Ok(())
    }

    #[test]
    fn apply_ignores_line_order() -> TestResult {
        let promotion = PercentagePromotion::new(Decimal::new(125, 1))?;
        let a = CartLineItem::new("a", Decimal::new(1999, 2), 3);
        let b = CartLineItem::new("b", Decimal::new(501, 2), 1);

        let forwards = promotion.apply(&[a.clone(), b.clone()])?;
        let backwards = promotion.apply(&[b, a])?;

        assert_eq!(forwards, backwards);

        Ok(())
    }
}
