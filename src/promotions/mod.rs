//! Promotions

use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

use crate::{
    discounts::DiscountError,
    items::CartLineItem,
    money::CentsError,
    promotions::{
        applied::{AppliedPromotion, CentsBreakdown},
        definition::{CustomConfig, PromotionDefinition},
        types::{BuyXPayYPromotion, PercentagePromotion},
    },
};

pub mod applied;
pub mod definition;
pub mod types;

/// Errors building or applying a promotion.
#[derive(Debug, Error, PartialEq)]
pub enum PromotionError {
    /// Record has no id.
    #[error("Promotion id is required")]
    MissingId,

    /// Record has no name.
    #[error("Promotion name is required")]
    MissingName,

    /// Record has no type tag.
    #[error("Promotion type is required")]
    MissingType,

    /// Record has a type tag no promotion type handles.
    #[error("Unsupported promotion type: {0}")]
    UnsupportedType(String),

    /// Percentage missing or outside `0 < percentage <= 100`.
    #[error("Percentage is required for percentage-based promotions")]
    InvalidPercentage,

    /// Buy or pay missing or not positive.
    #[error("Buy and pay values are required for 'Buy X Pay Y' promotions")]
    InvalidBuyPay,

    /// Pay is not smaller than buy, so nothing would ever be free.
    #[error("'Buy X Pay Y' promotions must pay for fewer items than they buy (buy {buy}, pay {pay})")]
    PayNotLessThanBuy {
        /// Group size
        buy: u32,
        /// Paid units per group
        pay: u32,
    },

    /// Cents arithmetic overflowed.
    #[error("promotion amounts overflowed")]
    Overflow,

    /// Wrapped cents conversion error.
    #[error(transparent)]
    Cents(#[from] CentsError),

    /// Wrapped discount calculation error.
    #[error(transparent)]
    Discount(#[from] DiscountError),
}

impl PromotionError {
    /// Whether the error comes from an invalid promotion record rather than arithmetic.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingId
                | Self::MissingName
                | Self::MissingType
                | Self::UnsupportedType(_)
                | Self::InvalidPercentage
                | Self::InvalidBuyPay
                | Self::PayNotLessThanBuy { .. }
        )
    }
}

/// Supported promotion types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PromotionType {
    /// Percentage off the cart total
    #[serde(rename = "percentage")]
    Percentage,

    /// Buy X units, pay for Y
    #[serde(rename = "buy-x-pay-y")]
    BuyXPayY,
}

impl PromotionType {
    /// Catalogue tag for this type
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::BuyXPayY => "buy-x-pay-y",
        }
    }
}

impl fmt::Display for PromotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromotionType {
    type Err = PromotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(PromotionError::MissingType),
            "percentage" => Ok(Self::Percentage),
            "buy-x-pay-y" | "buyXPayY" => Ok(Self::BuyXPayY),
            other => Err(PromotionError::UnsupportedType(other.to_string())),
        }
    }
}

/// Discount strategy of a promotion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromotionKind {
    /// Percentage off the cart total
    Percentage(PercentagePromotion),

    /// Buy X units, pay for Y
    BuyXPayY(BuyXPayYPromotion),
}

impl PromotionKind {
    /// Build the strategy for `promotion_type` from a record's configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation [`PromotionError`] if the configuration is missing or out of range.
    pub fn from_config(
        promotion_type: PromotionType,
        config: &CustomConfig,
    ) -> Result<Self, PromotionError> {
        match promotion_type {
            PromotionType::Percentage => {
                let points = config.percentage.ok_or(PromotionError::InvalidPercentage)?;

                Ok(Self::Percentage(PercentagePromotion::new(points)?))
            }
            PromotionType::BuyXPayY => {
                let (Some(buy), Some(pay)) = (config.buy, config.pay) else {
                    return Err(PromotionError::InvalidBuyPay);
                };

                let buy = u32::try_from(buy).map_err(|_err| PromotionError::InvalidBuyPay)?;
                let pay = u32::try_from(pay).map_err(|_err| PromotionError::InvalidBuyPay)?;

                Ok(Self::BuyXPayY(BuyXPayYPromotion::new(buy, pay)?))
            }
        }
    }

    /// Return the promotion type
    pub fn promotion_type(&self) -> PromotionType {
        match self {
            Self::Percentage(_) => PromotionType::Percentage,
            Self::BuyXPayY(_) => PromotionType::BuyXPayY,
        }
    }

    /// Apply the strategy to a cart.
    ///
    /// # Errors
    ///
    /// Returns an error if any amount cannot be represented in cents.
    pub fn apply(&self, items: &[CartLineItem]) -> Result<CentsBreakdown, PromotionError> {
        match self {
            Self::Percentage(percentage) => percentage.apply(items),
            Self::BuyXPayY(buy_x_pay_y) => buy_x_pay_y.apply(items),
        }
    }
}

/// A validated promotion, ready to be applied
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion {
    id: String,
    name: String,
    vip_only: bool,
    kind: PromotionKind,
}

impl Promotion {
    /// Create a new promotion.
    ///
    /// # Errors
    ///
    /// Returns [`PromotionError::MissingId`] or [`PromotionError::MissingName`] if either is blank.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        vip_only: bool,
        kind: PromotionKind,
    ) -> Result<Self, PromotionError> {
        let id = id.into();
        let name = name.into();

        ensure_present(&id, PromotionError::MissingId)?;
        ensure_present(&name, PromotionError::MissingName)?;

        Ok(Self {
            id,
            name,
            vip_only,
            kind,
        })
    }

    /// Return the promotion id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Return the promotion name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return whether only VIP customers may use this promotion
    pub fn vip_only(&self) -> bool {
        self.vip_only
    }

    /// Return the discount strategy
    pub fn kind(&self) -> &PromotionKind {
        &self.kind
    }

    /// Return the promotion type
    pub fn promotion_type(&self) -> PromotionType {
        self.kind.promotion_type()
    }

    /// Whether a customer with the given tier may see this promotion.
    pub fn is_visible_to(&self, is_vip: bool) -> bool {
        is_vip || !self.vip_only
    }

    /// Apply the promotion to a cart without modifying either.
    ///
    /// # Errors
    ///
    /// Returns an error if any amount cannot be represented in cents.
    pub fn apply(&self, items: &[CartLineItem]) -> Result<AppliedPromotion, PromotionError> {
        let cents = self.kind.apply(items)?;

        Ok(AppliedPromotion::new(self, cents))
    }
}

impl TryFrom<&PromotionDefinition> for Promotion {
    type Error = PromotionError;

    fn try_from(definition: &PromotionDefinition) -> Result<Self, Self::Error> {
        ensure_present(&definition.id, PromotionError::MissingId)?;
        ensure_present(&definition.name, PromotionError::MissingName)?;

        let promotion_type = definition.promotion_type.parse()?;
        let kind = PromotionKind::from_config(promotion_type, &definition.custom_config)?;

        Self::new(
            definition.id.clone(),
            definition.name.clone(),
            definition.vip_only,
            kind,
        )
    }
}

fn ensure_present(value: &str, error: PromotionError) -> Result<(), PromotionError> {
    if value.trim().is_empty() {
        Err(error)
    } else {
        Ok(())
    }
}
