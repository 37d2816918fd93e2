//! Applied Promotions

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    money::from_cents,
    promotions::{Promotion, PromotionError, PromotionType},
};

/// Total, discount and subtotal of a cart under one promotion, in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CentsBreakdown {
    total: i64,
    discount: i64,
    subtotal: i64,
}

impl CentsBreakdown {
    /// Create a breakdown from the nominal total and the discount.
    ///
    /// # Errors
    ///
    /// Returns [`PromotionError::Overflow`] if the subtotal cannot be represented.
    pub fn new(total: i64, discount: i64) -> Result<Self, PromotionError> {
        let subtotal = total
            .checked_sub(discount)
            .ok_or(PromotionError::Overflow)?;

        Ok(Self {
            total,
            discount,
            subtotal,
        })
    }

    /// Nominal cart total before the discount
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Discount granted by the promotion
    pub fn discount(&self) -> i64 {
        self.discount
    }

    /// Amount payable after the discount
    pub fn subtotal(&self) -> i64 {
        self.subtotal
    }
}

/// Result of applying one promotion to one cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedPromotion {
    id: String,
    name: String,
    #[serde(rename = "type")]
    promotion_type: PromotionType,
    vip_only: bool,
    total_in_cents: i64,
    discount_in_cents: i64,
    subtotal_in_cents: i64,
    #[serde(with = "rust_decimal::serde::float")]
    total: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    discount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    subtotal: Decimal,
}

impl AppliedPromotion {
    /// Record the outcome of `promotion` as computed in `cents`.
    pub fn new(promotion: &Promotion, cents: CentsBreakdown) -> Self {
        Self {
            id: promotion.id().to_string(),
            name: promotion.name().to_string(),
            promotion_type: promotion.promotion_type(),
            vip_only: promotion.vip_only(),
            total_in_cents: cents.total,
            discount_in_cents: cents.discount,
            subtotal_in_cents: cents.subtotal,
            total: from_cents(cents.total),
            discount: from_cents(cents.discount),
            subtotal: from_cents(cents.subtotal),
        }
    }

    /// Promotion id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Promotion name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Promotion type
    pub fn promotion_type(&self) -> PromotionType {
        self.promotion_type
    }

    /// Whether the promotion is restricted to VIP customers
    pub fn vip_only(&self) -> bool {
        self.vip_only
    }

    /// Cents breakdown
    pub fn cents(&self) -> CentsBreakdown {
        CentsBreakdown {
            total: self.total_in_cents,
            discount: self.discount_in_cents,
            subtotal: self.subtotal_in_cents,
        }
    }

    /// Nominal cart total in cents
    pub fn total_in_cents(&self) -> i64 {
        self.total_in_cents
    }

    /// Discount in cents
    pub fn discount_in_cents(&self) -> i64 {
        self.discount_in_cents
    }

    /// Amount payable in cents
    pub fn subtotal_in_cents(&self) -> i64 {
        self.subtotal_in_cents
    }

    /// Nominal cart total
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Discount
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Amount payable
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }
}
