//! Cart Offers prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    calculator::{CalculationError, CalculationResult, PromotionCalculator, best_offer, evaluate},
    catalog::{CatalogError, InMemoryCatalog, PromotionCatalog, YamlCatalog},
    discounts::DiscountError,
    fixtures::{FixtureError, load_cart},
    items::{CartItemError, CartLineItem},
    money::{CentsError, from_cents, to_cents},
    promotions::{
        Promotion, PromotionError, PromotionKind, PromotionType,
        applied::{AppliedPromotion, CentsBreakdown},
        definition::{CustomConfig, PromotionDefinition},
        types::{BuyXPayYPromotion, PercentagePromotion},
    },
    report::{OfferReport, ReportError},
};
