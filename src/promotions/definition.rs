//! Promotion Definitions
//!
//! Catalogue records as stored by the promotion source. They are loosely
//! typed on purpose: a malformed record is rejected when it is turned into a
//! [`Promotion`](crate::promotions::Promotion), with a validation error rather
//! than a parse error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::promotions::PromotionType;

/// Variant-specific configuration of a catalogue record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomConfig {
    /// Discount in percentage points, for percentage promotions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Decimal>,

    /// Group size, for "Buy X Pay Y" promotions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy: Option<i64>,

    /// Paid units per group, for "Buy X Pay Y" promotions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay: Option<i64>,
}

/// Promotion catalogue record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionDefinition {
    /// Unique promotion id
    #[serde(default)]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Type tag (`percentage`, `buy-x-pay-y`)
    #[serde(rename = "type", default)]
    pub promotion_type: String,

    /// Restricted to VIP customers
    #[serde(default)]
    pub vip_only: bool,

    /// Currently offered
    #[serde(default)]
    pub active: bool,

    /// Variant-specific configuration
    #[serde(default)]
    pub custom_config: CustomConfig,
}

impl PromotionDefinition {
    /// An active, public percentage promotion.
    pub fn percentage(id: impl Into<String>, name: impl Into<String>, points: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            promotion_type: PromotionType::Percentage.as_str().to_string(),
            vip_only: false,
            active: true,
            custom_config: CustomConfig {
                percentage: Some(points),
                ..CustomConfig::default()
            },
        }
    }

    /// An active, public "Buy X Pay Y" promotion.
    pub fn buy_x_pay_y(id: impl Into<String>, name: impl Into<String>, buy: i64, pay: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            promotion_type: PromotionType::BuyXPayY.as_str().to_string(),
            vip_only: false,
            active: true,
            custom_config: CustomConfig {
                buy: Some(buy),
                pay: Some(pay),
                ..CustomConfig::default()
            },
        }
    }

    /// Restrict this record to VIP customers.
    #[must_use]
    pub fn vip(mut self) -> Self {
        self.vip_only = true;
        self
    }

    /// Mark this record as inactive.
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}
