//! YAML Catalogue
//!
//! Reads a catalogue file of the form:
//!
//! ```yaml
//! promotions:
//!   - id: promo-002
//!     name: Get 3 for the Price of 2
//!     type: buy-x-pay-y
//!     vipOnly: false
//!     active: true
//!     customConfig:
//!       buy: 3
//!       pay: 2
//! ```
//!
//! The file is read on every fetch, so edits are picked up without a restart.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::{
    catalog::{CatalogError, PromotionCatalog},
    promotions::definition::PromotionDefinition,
};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    promotions: Vec<PromotionDefinition>,
}

/// Catalogue backed by a YAML file.
#[derive(Debug, Clone)]
pub struct YamlCatalog {
    path: PathBuf,
}

impl YamlCatalog {
    /// Create a catalogue reading the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the catalogue file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PromotionCatalog for YamlCatalog {
    async fn active_promotions(&self) -> Result<Vec<PromotionDefinition>, CatalogError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;

        parse_catalog(&contents)
    }
}

/// Parse catalogue contents, returning the active records in file order.
///
/// # Errors
///
/// - [`CatalogError::Yaml`]: the contents are not a valid catalogue.
/// - [`CatalogError::DuplicateId`]: two records (active or not) share an id.
pub fn parse_catalog(contents: &str) -> Result<Vec<PromotionDefinition>, CatalogError> {
    let file: CatalogFile = serde_norway::from_str(contents)?;

    let mut seen = FxHashSet::default();

    for definition in &file.promotions {
        if !seen.insert(definition.id.as_str()) {
            return Err(CatalogError::DuplicateId(definition.id.clone()));
        }
    }

    Ok(file
        .promotions
        .into_iter()
        .filter(|definition| definition.active)
        .collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rust_decimal::Decimal;
    use tempfile::NamedTempFile;
    use testresult::TestResult;

    use super::*;

    const CATALOGUE: &str = r"
promotions:
  - id: promo-001
    name: VIP Discount (15%)
    type: percentage
    vipOnly: true
    active: true
    customConfig:
      percentage: 15
  - id: promo-002
    name: Get 3 for the Price of 2
    type: buy-x-pay-y
    active: true
    customConfig:
      buy: 3
      pay: 2
  - id: promo-003
    name: Retired
    type: percentage
    active: false
    customConfig:
      percentage: 50
";

    #[test]
    fn parse_catalog_keeps_active_records_in_order() -> TestResult {
        let definitions = parse_catalog(CATALOGUE)?;

        assert_eq!(
            definitions,
            vec![
                PromotionDefinition::percentage("promo-001", "VIP Discount (15%)", Decimal::from(15))
                    .vip(),
                PromotionDefinition::buy_x_pay_y("promo-002", "Get 3 for the Price of 2", 3, 2),
            ]
        );

        Ok(())
    }

    #[test]
    fn parse_catalog_rejects_duplicate_ids() {
        let yaml = r"
promotions:
  - id: promo-001
    type: percentage
    active: false
  - id: promo-001
    type: percentage
    active: true
";

        assert!(matches!(
            parse_catalog(yaml),
            Err(CatalogError::DuplicateId(id)) if id == "promo-001"
        ));
    }

    #[test]
    fn parse_catalog_without_promotions_is_empty() -> TestResult {
        assert!(parse_catalog("promotions: []")?.is_empty());
        assert!(parse_catalog("{}")?.is_empty());

        Ok(())
    }

    #[test]
    fn parse_catalog_rejects_malformed_yaml() {
        assert!(matches!(
            parse_catalog("promotions: [unterminated"),
            Err(CatalogError::Yaml(_))
        ));
    }

    #[tokio::test]
    async fn yaml_catalog_reads_file() -> TestResult {
        let mut file = NamedTempFile::new()?;

        file.write_all(CATALOGUE.as_bytes())?;

        let catalog = YamlCatalog::new(file.path());

        assert_eq!(catalog.path(), file.path());
        assert_eq!(catalog.active_promotions().await?.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn yaml_catalog_missing_file_is_io_error() {
        let catalog = YamlCatalog::new("/nonexistent/promotions.yml");

        assert!(matches!(
            catalog.active_promotions().await,
            Err(CatalogError::Io(_))
        ));
    }
}
