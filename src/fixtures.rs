//! Cart Fixtures
//!
//! Carts stored as YAML (or JSON, which the YAML parser also accepts):
//!
//! ```yaml
//! items:
//!   - productId: prod-001
//!     price: 35.99
//!     quantity: 1
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::items::CartLineItem;

/// Errors loading a cart fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Fixture file could not be read.
    #[error("failed to read cart fixture: {0}")]
    Io(#[from] std::io::Error),

    /// Fixture file is not a valid cart.
    #[error("failed to parse cart fixture: {0}")]
    Parse(#[from] serde_norway::Error),
}

/// Cart fixture file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CartFixture {
    /// Cart lines
    #[serde(default)]
    pub items: Vec<CartLineItem>,
}

/// Parse cart fixture contents.
///
/// # Errors
///
/// Returns [`FixtureError::Parse`] if the contents are not a cart.
pub fn parse_cart(contents: &str) -> Result<Vec<CartLineItem>, FixtureError> {
    let fixture: CartFixture = serde_norway::from_str(contents)?;

    Ok(fixture.items)
}

/// Load a cart fixture file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub async fn load_cart(path: impl AsRef<Path>) -> Result<Vec<CartLineItem>, FixtureError> {
    let contents = tokio::fs::read_to_string(path).await?;

    parse_cart(&contents)
}
