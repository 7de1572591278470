//! # Invoice Totals
//!
//! The invoice calculator: pure functions deriving subtotal, tax and total
//! from a slice of line items.
//!
//! ## Calculation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Per-Line Calculation                                 │
//! │                                                                         │
//! │  line_total      = quantity × price                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  after_discount  = line_total − line_total × discount / 100            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  line_tax        = after_discount × tax_percent / 100                  │
//! │                                                                         │
//! │  RULE: discount is applied BEFORE tax, per line. A line's tax is       │
//! │  computed on its own post-discount amount, never on the invoice-wide   │
//! │  subtotal.                                                             │
//! │                                                                         │
//! │  subtotal = Σ after_discount     tax = Σ line_tax                      │
//! │  total    = subtotal + tax       (exactly, by construction)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! - No side effects, no error conditions: this module may never fail.
//! - An empty slice yields all-zero outputs.
//! - Out-of-range inputs (negative quantity, discount over 100) are not
//!   rejected here - validation is the caller's job - but the result is
//!   still numerically consistent.
//! - Decimal arithmetic throughout: summation order cannot introduce
//!   visible rounding drift in currency display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::InvoiceItem;

/// One line's amount after its discount is taken off.
#[inline]
fn line_after_discount(item: &InvoiceItem) -> Decimal {
    let line_total = item.price * Decimal::from(item.quantity);
    line_total - line_total * item.discount / Decimal::ONE_HUNDRED
}

/// Sum of all post-discount line amounts.
pub fn subtotal(items: &[InvoiceItem]) -> Decimal {
    items.iter().map(line_after_discount).sum()
}

/// Sum of per-line tax, each computed on that line's post-discount amount.
pub fn tax(items: &[InvoiceItem]) -> Decimal {
    items
        .iter()
        .map(|item| line_after_discount(item) * item.tax_percent / Decimal::ONE_HUNDRED)
        .sum()
}

/// Grand total: `subtotal + tax`.
pub fn total(items: &[InvoiceItem]) -> Decimal {
    subtotal(items) + tax(items)
}

/// Totals summary for view consumption.
///
/// ## Usage
/// ```rust
/// use quill_core::totals::InvoiceTotals;
/// use quill_core::types::InvoiceItem;
///
/// let items: Vec<InvoiceItem> = Vec::new();
/// let totals = InvoiceTotals::from(items.as_slice());
/// assert!(totals.total.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceTotals {
    #[ts(type = "number")]
    pub subtotal: Decimal,
    #[ts(type = "number")]
    pub tax: Decimal,
    #[ts(type = "number")]
    pub total: Decimal,
}

impl From<&[InvoiceItem]> for InvoiceTotals {
    fn from(items: &[InvoiceItem]) -> Self {
        InvoiceTotals {
            subtotal: subtotal(items),
            tax: tax(items),
            total: total(items),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(quantity: i64, price: Decimal, discount: Decimal, tax_percent: Decimal) -> InvoiceItem {
        InvoiceItem {
            product_id: String::new(),
            name: "line".to_string(),
            quantity,
            price,
            discount,
            tax_percent,
        }
    }

    #[test]
    fn test_empty_items_yield_all_zeros() {
        assert_eq!(subtotal(&[]), dec!(0));
        assert_eq!(tax(&[]), dec!(0));
        assert_eq!(total(&[]), dec!(0));
    }

    #[test]
    fn test_no_discount_no_tax_is_plain_sum() {
        let items = vec![
            item(2, dec!(10), dec!(0), dec!(0)),
            item(3, dec!(49.99), dec!(0), dec!(0)),
        ];
        assert_eq!(subtotal(&items), dec!(169.97));
        assert_eq!(tax(&items), dec!(0));
        assert_eq!(total(&items), dec!(169.97));
    }

    #[test]
    fn test_discount_applies_before_tax_per_line() {
        // price=100, qty=1, discount=50%, tax=10%
        // after_discount=50, tax=5, total=55 - NOT tax=10 (which would mean
        // taxing the pre-discount amount)
        let items = vec![item(1, dec!(100), dec!(50), dec!(10))];
        assert_eq!(subtotal(&items), dec!(50));
        assert_eq!(tax(&items), dec!(5));
        assert_eq!(total(&items), dec!(55));
    }

    #[test]
    fn test_tax_is_per_line_not_on_invoice_subtotal() {
        // Two lines with different tax rates: taxing the invoice-wide
        // subtotal at either rate would give the wrong answer.
        let items = vec![
            item(1, dec!(100), dec!(0), dec!(10)), // tax 10
            item(1, dec!(100), dec!(0), dec!(20)), // tax 20
        ];
        assert_eq!(subtotal(&items), dec!(200));
        assert_eq!(tax(&items), dec!(30));
        assert_eq!(total(&items), dec!(230));
    }

    #[test]
    fn test_total_equals_subtotal_plus_tax_exactly() {
        let items = vec![
            item(40, dec!(150), dec!(0), dec!(18)),
            item(12, dec!(49.99), dec!(10), dec!(18)),
            item(7, dec!(0.03), dec!(2.5), dec!(8.25)),
        ];
        assert_eq!(total(&items), subtotal(&items) + tax(&items));
    }

    #[test]
    fn test_decimal_sum_has_no_float_drift() {
        // 0.1 + 0.2 style inputs stay exact under Decimal
        let items = vec![
            item(1, dec!(0.1), dec!(0), dec!(0)),
            item(1, dec!(0.2), dec!(0), dec!(0)),
        ];
        assert_eq!(subtotal(&items), dec!(0.3));
    }

    #[test]
    fn test_negative_inputs_stay_numerically_consistent() {
        // Semantically meaningless, but the calculator must not reject or
        // panic - validation happens in the calling layer.
        let items = vec![item(-2, dec!(10), dec!(0), dec!(10))];
        assert_eq!(subtotal(&items), dec!(-20));
        assert_eq!(tax(&items), dec!(-2));
        assert_eq!(total(&items), dec!(-22));
    }

    #[test]
    fn test_invoice_totals_summary_matches_functions() {
        let items = vec![
            item(20, dec!(120), dec!(5), dec!(18)),
            item(1, dec!(200), dec!(0), dec!(18)),
        ];
        let summary = InvoiceTotals::from(items.as_slice());
        assert_eq!(summary.subtotal, subtotal(&items));
        assert_eq!(summary.tax, tax(&items));
        assert_eq!(summary.total, summary.subtotal + summary.tax);
    }
}
