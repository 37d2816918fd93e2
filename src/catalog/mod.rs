//! Promotion Catalogue
//!
//! Sources of promotion records. The calculator only ever asks for the
//! currently active records; where they live is up to the implementation.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::promotions::definition::PromotionDefinition;

pub mod yaml;

pub use yaml::YamlCatalog;

/// Errors fetching promotion records.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalogue file could not be read.
    #[error("failed to read promotion catalogue: {0}")]
    Io(#[from] std::io::Error),

    /// Catalogue file is not valid YAML for a promotion list.
    #[error("failed to parse promotion catalogue: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Two records share an id.
    #[error("duplicate promotion id in catalogue: {0}")]
    DuplicateId(String),

    /// Catalogue backend is not reachable.
    #[error("promotion catalogue unavailable: {0}")]
    Unavailable(String),
}

#[automock]
#[async_trait]
pub trait PromotionCatalog: Send + Sync {
    /// Retrieves every active promotion record, in catalogue order.
    async fn active_promotions(&self) -> Result<Vec<PromotionDefinition>, CatalogError>;
}

/// Catalogue held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    definitions: Vec<PromotionDefinition>,
}

impl InMemoryCatalog {
    /// Create a catalogue holding `definitions`.
    #[must_use]
    pub fn new(definitions: Vec<PromotionDefinition>) -> Self {
        Self { definitions }
    }

    /// Every record, active or not.
    pub fn definitions(&self) -> &[PromotionDefinition] {
        &self.definitions
    }
}

impl FromIterator<PromotionDefinition> for InMemoryCatalog {
    fn from_iter<T: IntoIterator<Item = PromotionDefinition>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait]
impl PromotionCatalog for InMemoryCatalog {
    async fn active_promotions(&self) -> Result<Vec<PromotionDefinition>, CatalogError> {
        Ok(self
            .definitions
            .iter()
            .filter(|definition| definition.active)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn in_memory_catalog_returns_active_records_in_order() -> TestResult {
        let catalog: InMemoryCatalog = [
            PromotionDefinition::percentage("promo-001", "Ten", Decimal::from(10)),
            PromotionDefinition::buy_x_pay_y("promo-002", "3 for 2", 3, 2).inactive(),
            PromotionDefinition::buy_x_pay_y("promo-003", "4 for 3", 4, 3),
        ]
        .into_iter()
        .collect();

        let active = catalog.active_promotions().await?;

        let ids: Vec<&str> = active.iter().map(|d| d.id.as_str()).collect();

        assert_eq!(ids, vec!["promo-001", "promo-003"]);
        assert_eq!(catalog.definitions().len(), 3);

        Ok(())
    }

    #[tokio::test]
    async fn empty_catalog_returns_nothing() -> TestResult {
        let catalog = InMemoryCatalog::default();

        assert!(catalog.active_promotions().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn mock_catalog_surfaces_errors() {
        let mut catalog = MockPromotionCatalog::new();

        catalog
            .expect_active_promotions()
            .once()
            .return_once(|| Err(CatalogError::Unavailable("connection refused".to_string())));

        let result = catalog.active_promotions().await;

        assert!(matches!(result, Err(CatalogError::Unavailable(_))));
    }
}
