//! # Report Aggregation
//!
//! Pure aggregation over invoice slices, feeding the dashboard cards, the
//! revenue chart and the monthly report table.
//!
//! ## Derived-Value Rule
//! Every monetary figure here is computed by running line items through
//! [`crate::totals`]. Nothing in this module reads a stored total, so the
//! dashboard, the invoice list and the report table can never disagree
//! about what an invoice is worth.
//!
//! ## Data Flow
//! ```text
//! store snapshot ──► &[Invoice] ──► dashboard_stats() ──► stat cards
//!                              ├──► monthly_breakdown() ──► bar chart
//!                              └──► report_totals()     ──► report header
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::totals;
use crate::types::{Invoice, InvoiceStatus};

// =============================================================================
// Dashboard Stats
// =============================================================================

/// Headline figures for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DashboardStats {
    /// Total value across every invoice, regardless of status.
    #[ts(type = "number")]
    pub total_revenue: Decimal,

    /// Total value of invoices already paid.
    #[ts(type = "number")]
    pub paid_total: Decimal,

    /// Number of paid invoices.
    pub paid_count: usize,

    /// Number of invoices still out (draft or sent).
    pub unpaid_count: usize,

    /// Number of overdue invoices.
    pub overdue_count: usize,
}

/// Computes the dashboard headline figures.
pub fn dashboard_stats(invoices: &[Invoice]) -> DashboardStats {
    let mut stats = DashboardStats {
        total_revenue: Decimal::ZERO,
        paid_total: Decimal::ZERO,
        paid_count: 0,
        unpaid_count: 0,
        overdue_count: 0,
    };

    for invoice in invoices {
        let total = totals::total(&invoice.items);
        stats.total_revenue += total;

        match invoice.status {
            InvoiceStatus::Paid => {
                stats.paid_total += total;
                stats.paid_count += 1;
            }
            InvoiceStatus::Draft | InvoiceStatus::Sent => stats.unpaid_count += 1,
            InvoiceStatus::Overdue => stats.overdue_count += 1,
        }
    }

    stats
}

// =============================================================================
// Monthly Breakdown
// =============================================================================

/// One month's worth of invoicing, keyed by creation date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MonthlySummary {
    /// Month key in `YYYY-MM` form; the view formats it for display.
    pub month: String,

    /// Revenue (invoice totals) created in this month.
    #[ts(type = "number")]
    pub revenue: Decimal,

    /// Tax portion of that revenue.
    #[ts(type = "number")]
    pub tax: Decimal,

    /// Number of invoices created in this month.
    pub count: usize,
}

/// Groups invoices by creation month, ascending.
///
/// Months with no invoices simply don't appear; the chart renders only
/// what's present.
pub fn monthly_breakdown(invoices: &[Invoice]) -> Vec<MonthlySummary> {
    let mut months: BTreeMap<String, MonthlySummary> = BTreeMap::new();

    for invoice in invoices {
        let key = invoice.created_at.format("%Y-%m").to_string();
        let entry = months.entry(key.clone()).or_insert_with(|| MonthlySummary {
            month: key,
            revenue: Decimal::ZERO,
            tax: Decimal::ZERO,
            count: 0,
        });
        entry.revenue += totals::total(&invoice.items);
        entry.tax += totals::tax(&invoice.items);
        entry.count += 1;
    }

    months.into_values().collect()
}

// =============================================================================
// Report Totals
// =============================================================================

/// Grand totals for the reports header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportTotals {
    #[ts(type = "number")]
    pub revenue: Decimal,
    #[ts(type = "number")]
    pub tax: Decimal,
    /// Total number of invoices.
    pub count: usize,
    /// Number of paid invoices.
    pub paid: usize,
    /// Number of invoices in any other status.
    pub unpaid: usize,
}

/// Computes the reports-page grand totals.
pub fn report_totals(invoices: &[Invoice]) -> ReportTotals {
    let paid = invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Paid)
        .count();

    ReportTotals {
        revenue: invoices.iter().map(|i| totals::total(&i.items)).sum(),
        tax: invoices.iter().map(|i| totals::tax(&i.items)).sum(),
        count: invoices.len(),
        paid,
        unpaid: invoices.len() - paid,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
