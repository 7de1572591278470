//! # Domain Types
//!
//! Core domain types used throughout Quill Invoice.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │     Product     │   │     Invoice     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name, email    │   │  sku (business) │   │  invoice_number │       │
//! │  │  gst_id         │   │  price          │   │  customer_name* │       │
//! │  │  created_at     │   │  tax_percent    │   │  items[], status│       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐      * snapshot fields: copied at creation        │
//! │  │   InvoiceItem   │        time, intentionally NOT kept in sync       │
//! │  │  ─────────────  │        with later edits to the source entity      │
//! │  │  product_id*    │                                                   │
//! │  │  name*, price*  │                                                   │
//! │  │  qty, discount  │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! - `id`: UUID v4 string - immutable, used for cross-entity references
//! - Business ID where one exists: `invoice_number`, `sku` - human-readable
//!
//! ## Wire Format
//! Every type serializes with camelCase field names and lowercase status
//! values so the persisted snapshot blob round-trips against data written
//! by earlier builds of the application.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{INVOICE_NUMBER_PAD, INVOICE_NUMBER_PREFIX};

// =============================================================================
// Invoice Number Formatting
// =============================================================================

/// Formats a sequence value as a human-readable invoice number.
///
/// ## Example
/// ```rust
/// use quill_core::types::invoice_number;
///
/// assert_eq!(invoice_number(7), "INV-007");
/// assert_eq!(invoice_number(1000), "INV-1000"); // widens, never truncates
/// ```
pub fn invoice_number(seq: u64) -> String {
    format!(
        "{}{:0width$}",
        INVOICE_NUMBER_PREFIX,
        seq,
        width = INVOICE_NUMBER_PAD
    )
}

// =============================================================================
// Customer
// =============================================================================

/// A billable customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Customer {
    /// Unique identifier (UUID v4). Immutable after creation.
    pub id: String,

    /// Display name. Required non-empty (enforced by the caller).
    pub name: String,

    /// Billing email. Required non-empty (enforced by the caller).
    pub email: String,

    /// Contact phone number (free-form).
    pub phone: String,

    /// Postal address (free-form, single field).
    pub address: String,

    /// Tax registration identifier (GSTIN / VAT ID / EIN).
    pub gst_id: String,

    /// Calendar date the customer was created (`YYYY-MM-DD`).
    #[ts(as = "String")]
    pub created_at: NaiveDate,
}

/// Fields for creating a customer; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub gst_id: String,
}

/// Partial update for a customer.
///
/// ## Merge Semantics
/// Every field is optional; [`CustomerPatch::apply`] copies only the fields
/// that are `Some`, leaving all unset fields untouched. `id` and
/// `created_at` are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub gst_id: Option<String>,
}

impl CustomerPatch {
    /// Merges the set fields of this patch into `customer`.
    pub fn apply(self, customer: &mut Customer) {
        if let Some(name) = self.name {
            customer.name = name;
        }
        if let Some(email) = self.email {
            customer.email = email;
        }
        if let Some(phone) = self.phone {
            customer.phone = phone;
        }
        if let Some(address) = self.address {
            customer.address = address;
        }
        if let Some(gst_id) = self.gst_id {
            customer.gst_id = gst_id;
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A sellable product or service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4). Immutable after creation.
    pub id: String,

    /// Display name shown in pickers and on invoice lines.
    pub name: String,

    /// Longer description for catalogue views.
    pub description: String,

    /// Unit price. Non-negative (enforced by the caller).
    #[ts(type = "number")]
    pub price: Decimal,

    /// Flat tax rate applied per line, as a percentage in 0-100.
    #[ts(type = "number")]
    pub tax_percent: Decimal,

    /// Stock Keeping Unit - business identifier (free-form).
    pub sku: String,
}

/// Fields for creating a product; the store assigns `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    #[ts(type = "number")]
    pub price: Decimal,
    #[ts(type = "number")]
    pub tax_percent: Decimal,
    pub sku: String,
}

/// Partial update for a product. Same merge semantics as [`CustomerPatch`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    #[ts(type = "number | null")]
    pub price: Option<Decimal>,
    #[ts(type = "number | null")]
    pub tax_percent: Option<Decimal>,
    pub sku: Option<String>,
}

impl ProductPatch {
    /// Merges the set fields of this patch into `product`.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(tax_percent) = self.tax_percent {
            product.tax_percent = tax_percent;
        }
        if let Some(sku) = self.sku {
            product.sku = sku;
        }
    }
}

// =============================================================================
// Invoice Item
// =============================================================================

/// A single line on an invoice.
///
/// ## Design Notes
/// - Value type: items have no identity of their own and live embedded in
///   their invoice.
/// - `product_id`: reference back to the product (may be empty for lines
///   typed in manually).
/// - `name`, `price`, `tax_percent`: frozen copies of product data at the
///   moment the line was added. This ensures an issued invoice displays
///   consistent data even if the product is edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceItem {
    /// Product ID this line was picked from, or empty for manual lines.
    pub product_id: String,

    /// Display name at time of adding (frozen).
    pub name: String,

    /// Quantity. Positive integer expected (enforced by the caller).
    pub quantity: i64,

    /// Unit price at time of adding (frozen).
    /// This is critical: we lock in the price when the line is created.
    #[ts(type = "number")]
    pub price: Decimal,

    /// Per-line discount as a percentage in 0-100, applied before tax.
    #[ts(type = "number")]
    pub discount: Decimal,

    /// Tax rate at time of adding (frozen), as a percentage in 0-100.
    #[ts(type = "number")]
    pub tax_percent: Decimal,
}

impl InvoiceItem {
    /// Creates an invoice line from a product and quantity.
    ///
    /// ## Price Freezing
    /// Name, price and tax rate are captured at this moment. If the product
    /// changes later, this line retains the original values.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        InvoiceItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            quantity,
            price: product.price,
            discount: Decimal::ZERO,
            tax_percent: product.tax_percent,
        }
    }
}

// =============================================================================
// Invoice Status
// =============================================================================

/// The lifecycle status of an invoice.
///
/// ## State Machine
/// All transitions are externally driven: any status may be patched to any
/// other via `update_invoice`. There is no automatic overdue detection in
/// the domain layer - date comparison, if wanted, belongs to the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum InvoiceStatus {
    /// Being edited; the only creation-time default.
    #[default]
    Draft,
    /// Delivered to the customer, awaiting payment.
    Sent,
    /// Payment received.
    Paid,
    /// Past its due date without payment (set by the caller).
    Overdue,
}

// =============================================================================
// Invoice
// =============================================================================

/// A self-contained financial record.
///
/// ## Invariants
/// - `invoice_number` comes from a strictly increasing counter; deleting
///   invoices never frees or reassigns a number.
/// - `customer_name` is a denormalized snapshot, not a live join: later
///   edits to the referenced customer do not change this invoice.
/// - The invoice stores no total; every rendered total is recomputed from
///   `items` via [`crate::totals`], so derived values can never drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Invoice {
    /// Unique identifier (UUID v4). Immutable after creation.
    pub id: String,

    /// Sequential business identifier (`INV-001`, ...). Never reused.
    pub invoice_number: String,

    /// Reference to the billed customer. May dangle after the customer is
    /// deleted; the snapshot fields keep this record valid.
    pub customer_id: String,

    /// Customer display name at creation time (frozen).
    pub customer_name: String,

    /// Ordered line items.
    pub items: Vec<InvoiceItem>,

    /// Lifecycle status. Settable to any value by patch.
    pub status: InvoiceStatus,

    /// Payment due date (`YYYY-MM-DD`).
    #[ts(as = "String")]
    pub due_date: NaiveDate,

    /// Calendar date the invoice was created (`YYYY-MM-DD`).
    #[ts(as = "String")]
    pub created_at: NaiveDate,

    /// Free-text notes printed on the invoice.
    pub notes: String,
}

/// Fields for creating an invoice; the store assigns `id`,
/// `invoice_number` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewInvoice {
    pub customer_id: String,
    /// Snapshot of the customer's name, taken by the form at selection time.
    pub customer_name: String,
    pub items: Vec<InvoiceItem>,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[ts(as = "String")]
    pub due_date: NaiveDate,
    #[serde(default)]
    pub notes: String,
}

/// Partial update for an invoice.
///
/// ## Merge Semantics
/// Only set fields are copied; `id`, `invoice_number` and `created_at` are
/// never reassigned, so they have no patch field at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoicePatch {
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub items: Option<Vec<InvoiceItem>>,
    pub status: Option<InvoiceStatus>,
    #[ts(as = "Option<String>")]
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl InvoicePatch {
    /// Merges the set fields of this patch into `invoice`.
    pub fn apply(self, invoice: &mut Invoice) {
        if let Some(customer_id) = self.customer_id {
            invoice.customer_id = customer_id;
        }
        if let Some(customer_name) = self.customer_name {
            invoice.customer_name = customer_name;
        }
        if let Some(items) = self.items {
            invoice.items = items;
        }
        if let Some(status) = self.status {
            invoice.status = status;
        }
        if let Some(due_date) = self.due_date {
            invoice.due_date = due_date;
        }
        if let Some(notes) = self.notes {
            invoice.notes = notes;
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

    fn test_product() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Web Development".to_string(),
            description: "Full-stack web development services".to_string(),
            price: dec!(150),
            tax_percent: dec!(18),
            sku: "SVC-WEB".to_string(),
        }
    }

    #[test]
    fn test_invoice_number_zero_pads_to_three() {
        assert_eq!(invoice_number(1), "INV-001");
        assert_eq!(invoice_number(42), "INV-042");
        assert_eq!(invoice_number(999), "INV-999");
    }

    #[test]
    fn test_invoice_number_widens_past_999() {
        assert_eq!(invoice_number(1000), "INV-1000");
        assert_eq!(invoice_number(12345), "INV-12345");
    }

    #[test]
    fn test_item_from_product_freezes_fields() {
        let mut product = test_product();
        let item = InvoiceItem::from_product(&product, 3);

        // Later product edits must not reach the captured line
        product.price = dec!(200);
        product.name = "Renamed".to_string();

        assert_eq!(item.product_id, "p1");
        assert_eq!(item.name, "Web Development");
        assert_eq!(item.quantity, 3);
        assert_eq!(item.price, dec!(150));
        assert_eq!(item.discount, dec!(0));
        assert_eq!(item.tax_percent, dec!(18));
    }

    #[test]
    fn test_customer_patch_merges_only_set_fields() {
        let mut customer = Customer {
            id: "c1".to_string(),
            name: "Acme Corp".to_string(),
            email: "billing@acme.com".to_string(),
            phone: "+1-555-0101".to_string(),
            address: "123 Business Ave".to_string(),
            gst_id: "GST001".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };

        CustomerPatch {
            email: Some("accounts@acme.com".to_string()),
            ..Default::default()
        }
        .apply(&mut customer);

        assert_eq!(customer.email, "accounts@acme.com");
        // everything else is untouched
        assert_eq!(customer.name, "Acme Corp");
        assert_eq!(customer.phone, "+1-555-0101");
        assert_eq!(customer.gst_id, "GST001");
    }

    #[test]
    fn test_invoice_status_wire_format_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&InvoiceStatus::Overdue).unwrap(),
            "\"overdue\""
        );
        let status: InvoiceStatus = serde_json::from_str("\"draft\"").unwrap();
        assert_eq!(status, InvoiceStatus::Draft);
    }

    #[test]
    fn test_invoice_serializes_camel_case() {
        let invoice = Invoice {
            id: "inv1".to_string(),
            invoice_number: "INV-001".to_string(),
            customer_id: "c1".to_string(),
            customer_name: "Acme Corp".to_string(),
            items: vec![],
            status: InvoiceStatus::Sent,
            due_date: NaiveDate::from_ymd_opt(2025, 1, 30).unwrap(),
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            notes: String::new(),
        };

        let json = serde_json::to_value(&invoice).unwrap();
        assert_eq!(json["invoiceNumber"], "INV-001");
        assert_eq!(json["customerName"], "Acme Corp");
        assert_eq!(json["dueDate"], "2025-01-30");
        assert_eq!(json["createdAt"], "2025-01-01");
    }
}
