//! Net / tax / gross summary on the invoice detail page.

#[cfg(test)]
#[path = "money_summary_test.rs"]
mod money_summary_test;

use crate::dom::TextSlot;
use crate::money::{MoneyFormat, parse_amount};

/// Amounts shown on the detail page. `gross` is always `net + tax`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoneySummary {
    pub net: f64,
    pub tax: f64,
    pub gross: f64,
}

impl MoneySummary {
    #[must_use]
    pub fn new(net: f64, tax: f64) -> Self {
        Self { net, tax, gross: net + tax }
    }

    /// Parse net and tax from rendered text; unparseable text is zero.
    #[must_use]
    pub fn from_texts(net: &str, tax: &str) -> Self {
        Self::new(parse_amount(net), parse_amount(tax))
    }
}

/// Rewrite the three amount elements as formatted currency.
///
/// Runs only when all three elements are present; otherwise nothing is
/// touched. Safe to repeat: formatted text parses back to its amount, so the
/// suffix never compounds and gross is recomputed rather than accumulated.
pub fn format_money_summary<T: TextSlot + ?Sized>(
    net: Option<&T>,
    tax: Option<&T>,
    gross: Option<&T>,
    format: &MoneyFormat,
) -> Option<MoneySummary> {
    let (Some(net_el), Some(tax_el), Some(gross_el)) = (net, tax, gross) else {
        log::debug!("money summary skipped: amount elements incomplete");
        return None;
    };

    let summary = MoneySummary::from_texts(&net_el.text(), &tax_el.text());
    net_el.set_text(&format.format(summary.net));
    tax_el.set_text(&format.format(summary.tax));
    gross_el.set_text(&format.format(summary.gross));
    log::debug!("money summary: net={} tax={} gross={}", summary.net, summary.tax, summary.gross);
    Some(summary)
}
