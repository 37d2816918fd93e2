//! Offer Report
//!
//! Renders a [`CalculationResult`] as a console table.

use std::{fmt::Write, io, time::Duration};

use humanize_duration::{Truncate, prelude::DurationExt};
use rusty_money::iso::Currency;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{calculator::CalculationResult, money::to_money};

/// Errors writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Output could not be written.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Marker shown next to the best offer.
const BEST_MARKER: &str = "★";

/// Console report of every offer for one cart.
#[derive(Debug, Clone, Copy)]
pub struct OfferReport<'a> {
    result: &'a CalculationResult,
    currency: &'static Currency,
    elapsed: Duration,
}

impl<'a> OfferReport<'a> {
    /// Create a report for `result`, formatting amounts in `currency`.
    pub fn new(result: &'a CalculationResult, currency: &'static Currency, elapsed: Duration) -> Self {
        Self {
            result,
            currency,
            elapsed,
        }
    }

    /// Writes the report.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        if self.result.is_empty() {
            writeln!(out, "\nNo promotions apply to this cart.")?;
        } else {
            self.write_table(&mut out)?;
            self.write_best_offer(&mut out)?;
        }

        writeln!(
            out,
            " Calculated in {}\n",
            self.elapsed.human(Truncate::Nano)
        )?;

        Ok(())
    }

    fn write_table(&self, out: &mut impl io::Write) -> Result<(), ReportError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Promotion", "Type", "VIP", "Total", "Discount", "Subtotal"]);

        let best_offer_id = self.result.best_offer_id();
        let mut best_row = None;

        for (idx, promotion) in self.result.promotions().iter().enumerate() {
            let is_best = best_offer_id == Some(promotion.id());

            if is_best {
                best_row = Some(idx + 1);
            }

            builder.push_record([
                if is_best { BEST_MARKER } else { "" }.to_string(),
                promotion.name().to_string(),
                promotion.promotion_type().to_string(),
                if promotion.vip_only() { "yes" } else { "" }.to_string(),
                to_money(promotion.total_in_cents(), self.currency).to_string(),
                format!("-{}", to_money(promotion.discount_in_cents(), self.currency)),
                to_money(promotion.subtotal_in_cents(), self.currency).to_string(),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(
            1,
            HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
        );

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(4..7), Alignment::right());

        if let Some(row) = best_row {
            table.modify((row, 0), Color::FG_GREEN);
            table.modify((row, 5), Color::FG_GREEN);
        }

        let table_str = colorize_borders(&table.to_string());

        writeln!(out, "\n{table_str}")?;

        Ok(())
    }

    fn write_best_offer(&self, out: &mut impl io::Write) -> Result<(), ReportError> {
        if let Some(best) = self.result.best_offer() {
            writeln!(
                out,
                " \x1b[1mBest offer:\x1b[0m {} ({}), saving {}",
                best.name(),
                best.id(),
                to_money(best.discount_in_cents(), self.currency)
            )?;
        }

        Ok(())
    }
}

/// Wraps runs of box-drawing characters (U+2500..U+257F) in ANSI dark-grey escape codes.
fn colorize_borders(table: &str) -> String {
    let mut out = String::with_capacity(table.len() + 256);
    let mut in_run = false;

    for ch in table.chars() {
        let box_char = ('\u{2500}'..='\u{257F}').contains(&ch);

        if box_char && !in_run {
            _ = out.write_str("\x1b[90m");
            in_run = true;
        } else if !box_char && in_run {
            _ = out.write_str("\x1b[0m");
            in_run = false;
        }

        out.push(ch);
    }

    if in_run {
        _ = out.write_str("\x1b[0m");
    }

    out
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use crate::{
        calculator::evaluate, items::CartLineItem, promotions::definition::PromotionDefinition,
    };

    use super::*;

    fn test_result() -> TestResult<CalculationResult> {
        let definitions = [
            PromotionDefinition::percentage("promo-001", "VIP Discount (15%)", Decimal::from(15))
                .vip(),
            PromotionDefinition::buy_x_pay_y("promo-002", "Get 3 for the Price of 2", 3, 2),
        ];
        let items = [
            CartLineItem::new("prod-001", Decimal::new(3599, 2), 1),
            CartLineItem::new("prod-002", Decimal::new(6550, 2), 1),
            CartLineItem::new("prod-003", Decimal::new(8075, 2), 1),
        ];

        Ok(evaluate(&definitions, &items, true)?)
    }

    #[test]
    fn write_to_renders_every_offer_and_best_offer() -> TestResult {
        let result = test_result()?;
        let report = OfferReport::new(&result, USD, Duration::from_millis(3));

        let mut out = Vec::new();
        report.write_to(&mut out)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("VIP Discount (15%)"), "missing percentage row");
        assert!(output.contains("Get 3 for the Price of 2"), "missing 3-for-2 row");
        assert!(output.contains("buy-x-pay-y"), "missing type tag");
        assert!(output.contains("$182.24"), "missing cart total");
        assert!(output.contains("Best offer:"), "missing best offer line");
        assert!(output.contains("(promo-002)"), "wrong best offer");
        assert!(output.contains(BEST_MARKER), "missing best marker");
        assert!(output.contains("Calculated in"), "missing elapsed time");

        Ok(())
    }

    #[test]
    fn write_to_uses_requested_currency() -> TestResult {
        let result = test_result()?;
        let report = OfferReport::new(&result, GBP, Duration::from_millis(1));

        let mut out = Vec::new();
        report.write_to(&mut out)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("£182.24"), "amounts should be in pounds");

        Ok(())
    }

    #[test]
    fn write_to_reports_empty_result() -> TestResult {
        let result = CalculationResult::default();
        let report = OfferReport::new(&result, USD, Duration::ZERO);

        let mut out = Vec::new();
        report.write_to(&mut out)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("No promotions apply"), "missing empty notice");
        assert!(!output.contains("Best offer:"), "empty result has no best offer");

        Ok(())
    }

    #[test]
    fn colorize_borders_wraps_box_runs() {
        assert_eq!(colorize_borders("─┼a"), "\x1b[90m─┼\x1b[0ma");
        assert_eq!(colorize_borders("abc"), "abc");
    }
}
