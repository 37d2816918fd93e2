//! Units
//!
//! Cart lines ranked by unit price, so discounts can be assigned to
//! individual units without materialising one entry per unit bought.

use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::{items::CartLineItem, money::CentsError};

/// Inline capacity before ranked lines spill to the heap.
pub const INLINE_LINES: usize = 16;

/// Ranked lines of a cart.
pub type PricedLines<'a> = SmallVec<[PricedLine<'a>; INLINE_LINES]>;

/// A run of identical units from one cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedLine<'a> {
    product_id: &'a str,
    price: Decimal,
    cents: i64,
    quantity: u32,
    line: usize,
}

impl<'a> PricedLine<'a> {
    /// Returns the product reference.
    pub fn product_id(&self) -> &'a str {
        self.product_id
    }

    /// Returns the unit price.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the unit price in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the number of units in this run.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the index of the cart line this run came from.
    pub fn line(&self) -> usize {
        self.line
    }
}

/// Total number of units in a cart.
pub fn unit_count(items: &[CartLineItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity())).sum()
}

/// Cart lines ordered cheapest first.
///
/// Lines with equal prices keep their cart order.
///
/// # Errors
///
/// Returns a [`CentsError`] if a unit price cannot be represented in cents.
pub fn cheapest_first(items: &[CartLineItem]) -> Result<PricedLines<'_>, CentsError> {
    let mut lines = items
        .iter()
        .enumerate()
        .map(|(line, item)| {
            Ok(PricedLine {
                product_id: item.product_id(),
                price: item.price(),
                cents: item.unit_cents()?,
                quantity: item.quantity(),
                line,
            })
        })
        .collect::<Result<PricedLines<'_>, CentsError>>()?;

    lines.sort_by_key(PricedLine::price);

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn test_items() -> [CartLineItem; 3] {
        [
            CartLineItem::new("shirt", Decimal::from(10), 2),
            CartLineItem::new("socks", Decimal::from(5), 2),
            CartLineItem::new("hat", Decimal::from(12), 1),
        ]
    }

    #[test]
    fn cheapest_first_sorts_ascending() -> TestResult {
        let items = test_items();

        let lines = cheapest_first(&items)?;

        let ranked: Vec<(&str, i64, u32, usize)> = lines
            .iter()
            .map(|line| (line.product_id(), line.cents(), line.quantity(), line.line()))
            .collect();

        assert_eq!(
            ranked,
            vec![("socks", 500, 2, 1), ("shirt", 1000, 2, 0), ("hat", 1200, 1, 2)]
        );

        Ok(())
    }

    #[test]
    fn cheapest_first_is_stable_for_equal_prices() -> TestResult {
        let items = [
            CartLineItem::new("first", Decimal::from(5), 1),
            CartLineItem::new("pricey", Decimal::from(9), 1),
            CartLineItem::new("second", Decimal::from(5), 1),
        ];

        let lines = cheapest_first(&items)?;

        let products: Vec<&str> = lines.iter().map(PricedLine::product_id).collect();

        assert_eq!(products, vec!["first", "second", "pricey"]);

        Ok(())
    }

    #[test]
    fn cheapest_first_keeps_decimal_price() -> TestResult {
        let items = [CartLineItem::new("shirt", Decimal::new(3599, 2), 2)];

        let lines = cheapest_first(&items)?;

        assert_eq!(lines.len(), 1);
        assert!(
            lines
                .iter()
                .all(|line| line.price() == Decimal::new(3599, 2) && line.cents() == 3599),
            "the run should carry the line price"
        );

        Ok(())
    }

    #[test]
    fn unit_count_sums_quantities_without_overflow() {
        let items = [
            CartLineItem::new("a", Decimal::ONE, u32::MAX),
            CartLineItem::new("b", Decimal::ONE, u32::MAX),
        ];

        assert_eq!(unit_count(&items), 2 * u64::from(u32::MAX));
        assert_eq!(unit_count(&test_items()), 5);
    }

    #[test]
    fn empty_cart_has_no_lines() -> TestResult {
        assert!(cheapest_first(&[])?.is_empty());
        assert_eq!(unit_count(&[]), 0);

        Ok(())
    }
}
