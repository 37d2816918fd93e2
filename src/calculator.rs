//! Promotion Calculator
//!
//! Applies every eligible promotion to a cart and picks the best offer.

use serde::Serialize;
use thiserror::Error;
use tracing::{Span, debug, error, warn};

use crate::{
    catalog::{CatalogError, PromotionCatalog},
    items::{CartItemError, CartLineItem, validate_cart},
    promotions::{
        Promotion, PromotionError, applied::AppliedPromotion, definition::PromotionDefinition,
    },
};

/// Errors calculating offers for a cart.
#[derive(Debug, Error)]
pub enum CalculationError {
    /// Cart has no lines.
    #[error("Cart items are required")]
    EmptyCart,

    /// A cart line failed validation.
    #[error(transparent)]
    InvalidCartItem(#[from] CartItemError),

    /// A catalogue record could not be turned into a promotion or applied.
    #[error("promotion {id}: {source}")]
    Promotion {
        /// Id of the offending record
        id: String,
        /// Underlying error
        #[source]
        source: PromotionError,
    },

    /// The catalogue could not be read.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl CalculationError {
    /// Whether the caller sent something invalid, as opposed to a dependency failing.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::EmptyCart | Self::InvalidCartItem(_) => true,
            Self::Promotion { source, .. } => source.is_validation(),
            Self::Catalog(_) => false,
        }
    }
}

/// Every applicable offer for a cart, and the best of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    promotions: Vec<AppliedPromotion>,
    best_offer_id: Option<String>,
}

impl CalculationResult {
    /// Build a result, selecting the best offer from `promotions`.
    pub fn new(promotions: Vec<AppliedPromotion>) -> Self {
        let best_offer_id = best_offer(&promotions).map(|best| best.id().to_string());

        Self {
            promotions,
            best_offer_id,
        }
    }

    /// Offers with a positive discount, in catalogue order
    pub fn promotions(&self) -> &[AppliedPromotion] {
        &self.promotions
    }

    /// Id of the offer with the greatest discount
    pub fn best_offer_id(&self) -> Option<&str> {
        self.best_offer_id.as_deref()
    }

    /// The offer with the greatest discount
    pub fn best_offer(&self) -> Option<&AppliedPromotion> {
        let id = self.best_offer_id.as_deref()?;

        self.promotions.iter().find(|promotion| promotion.id() == id)
    }

    /// Whether no promotion gives a discount
    pub fn is_empty(&self) -> bool {
        self.promotions.is_empty()
    }
}

/// Pick the promotion with the greatest discount.
///
/// Ties go to the earliest promotion.
pub fn best_offer(promotions: &[AppliedPromotion]) -> Option<&AppliedPromotion> {
    promotions.iter().fold(None, |best, candidate| match best {
        Some(current) if current.discount_in_cents() >= candidate.discount_in_cents() => {
            Some(current)
        }
        _ => Some(candidate),
    })
}

/// Apply every definition visible to the customer and collect the discounting ones.
///
/// # Errors
///
/// Returns [`CalculationError::Promotion`] for the first definition that cannot be built or applied.
pub fn evaluate(
    definitions: &[PromotionDefinition],
    items: &[CartLineItem],
    is_vip: bool,
) -> Result<CalculationResult, CalculationError> {
    let mut applied = Vec::with_capacity(definitions.len());

    for definition in definitions {
        if definition.vip_only && !is_vip {
            debug!(promotion_id = %definition.id, "skipping VIP-only promotion");

            continue;
        }

        let promotion = Promotion::try_from(definition).map_err(|source| {
            CalculationError::Promotion {
                id: definition.id.clone(),
                source,
            }
        })?;

        let outcome = promotion
            .apply(items)
            .map_err(|source| CalculationError::Promotion {
                id: definition.id.clone(),
                source,
            })?;

        debug!(
            promotion_id = %outcome.id(),
            promotion_type = %outcome.promotion_type(),
            discount_in_cents = outcome.discount_in_cents(),
            "applied promotion"
        );

        if outcome.discount_in_cents() > 0 {
            applied.push(outcome);
        }
    }

    Ok(CalculationResult::new(applied))
}

/// Calculates offers for carts against a promotion catalogue.
#[derive(Debug, Clone)]
pub struct PromotionCalculator<C> {
    catalog: C,
}

impl<C: PromotionCatalog> PromotionCalculator<C> {
    /// Create a calculator reading promotions from `catalog`.
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Return the underlying catalogue
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Calculate every applicable offer for a cart.
    ///
    /// # Errors
    ///
    /// - [`CalculationError::EmptyCart`] / [`CalculationError::InvalidCartItem`]: bad cart.
    /// - [`CalculationError::Catalog`]: the catalogue could not be read.
    /// - [`CalculationError::Promotion`]: an active record is invalid.
    #[tracing::instrument(
        name = "calculator.calculate",
        skip(self, items),
        fields(
            item_count = items.len(),
            catalog_size = tracing::field::Empty,
            offer_count = tracing::field::Empty,
            best_offer_id = tracing::field::Empty
        )
    )]
    pub async fn calculate(
        &self,
        items: &[CartLineItem],
        is_vip: bool,
    ) -> Result<CalculationResult, CalculationError> {
        let result = self.try_calculate(items, is_vip).await;

        match &result {
            Ok(result) => {
                let span = Span::current();

                span.record("offer_count", result.promotions().len());

                if let Some(best_offer_id) = result.best_offer_id() {
                    span.record("best_offer_id", best_offer_id);
                }
            }
            Err(err) if err.is_client_error() => warn!(error = %err, "rejected cart"),
            Err(err) => error!(error = %err, "failed to calculate offers"),
        }

        result
    }

    async fn try_calculate(
        &self,
        items: &[CartLineItem],
        is_vip: bool,
    ) -> Result<CalculationResult, CalculationError> {
        if items.is_empty() {
            return Err(CalculationError::EmptyCart);
        }

        validate_cart(items)?;

        let definitions = self.catalog.active_promotions().await?;

        Span::current().record("catalog_size", definitions.len());

        evaluate(&definitions, items, is_vip)
    }
}
