//! # In-Memory Store
//!
//! The collections, the invoice-number counter, and the command/query
//! surface. This module is purely in-memory; [`crate::state`] layers
//! locking and persistence on top.
//!
//! ## Mutation Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Command Semantics                                  │
//! │                                                                         │
//! │  add_*      assigns a fresh UUID (+ today's date where the entity      │
//! │             carries one), appends, returns the created entity          │
//! │                                                                         │
//! │  update_*   field-by-field merge of the patch's set fields;            │
//! │             SILENT NO-OP if the id is unknown                          │
//! │                                                                         │
//! │  delete_*   removes by id; SILENT NO-OP if the id is unknown;          │
//! │             never cascades (invoices keep their snapshot fields)       │
//! │                                                                         │
//! │  add_invoice additionally consumes the next sequence value:            │
//! │             INV-001, INV-002, ... strictly increasing for the          │
//! │             store's lifetime, NEVER reused after deletion              │
//! │                                                                         │
//! │  Validation happens in the caller (quill-core::validation); the        │
//! │  store accepts whatever well-typed payload it is given.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, Utc};
use tracing::debug;
use uuid::Uuid;

use quill_core::types::{
    invoice_number, Customer, CustomerPatch, Invoice, InvoicePatch, NewCustomer, NewInvoice,
    NewProduct, Product, ProductPatch,
};

use crate::snapshot::StoreSnapshot;

/// Generates a fresh collection-unique id.
///
/// UUID v4: uniqueness is the whole contract, the format is incidental.
fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Today as a calendar date, for creation-date stamping.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// The application's single source of truth.
///
/// Collections keep insertion order. Cloning is cheap enough at this scale
/// and is how [`crate::state::StoreState`] implements commit-then-swap.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    customers: Vec<Customer>,
    products: Vec<Product>,
    invoices: Vec<Invoice>,
    next_invoice_num: u64,
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}

impl Store {
    /// Creates an empty store with the invoice counter at 1.
    pub fn new() -> Self {
        Store {
            customers: Vec::new(),
            products: Vec::new(),
            invoices: Vec::new(),
            next_invoice_num: 1,
        }
    }

    /// Rebuilds a store from a persisted snapshot.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Store {
            customers: snapshot.customers,
            products: snapshot.products,
            invoices: snapshot.invoices,
            next_invoice_num: snapshot.next_invoice_num,
        }
    }

    /// Captures the full store state as a persistable snapshot.
    pub fn to_snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            customers: self.customers.clone(),
            products: self.products.clone(),
            invoices: self.invoices.clone(),
            next_invoice_num: self.next_invoice_num,
        }
    }

    // =========================================================================
    // Query Surface
    // =========================================================================

    /// All customers, in insertion order.
    #[inline]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// All products, in insertion order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All invoices, in insertion order (views sort as they see fit).
    #[inline]
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// The sequence value the next invoice will receive.
    #[inline]
    pub fn next_invoice_num(&self) -> u64 {
        self.next_invoice_num
    }

    // =========================================================================
    // Customer Commands
    // =========================================================================

    /// Adds a customer: fresh id, today's creation date, appended last.
    pub fn add_customer(&mut self, draft: NewCustomer) -> Customer {
        let customer = Customer {
            id: fresh_id(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            gst_id: draft.gst_id,
            created_at: today(),
        };
        debug!(id = %customer.id, "add_customer");
        self.customers.push(customer.clone());
        customer
    }

    /// Merges a patch into the matching customer. No-op if the id is unknown.
    pub fn update_customer(&mut self, id: &str, patch: CustomerPatch) {
        debug!(%id, "update_customer");
        if let Some(customer) = self.customers.iter_mut().find(|c| c.id == id) {
            patch.apply(customer);
        }
    }

    /// Removes the matching customer. No-op if the id is unknown.
    ///
    /// Existing invoices are untouched: their `customer_id` may now dangle,
    /// but the snapshot `customer_name` keeps them self-contained.
    pub fn delete_customer(&mut self, id: &str) {
        debug!(%id, "delete_customer");
        self.customers.retain(|c| c.id != id);
    }

    // =========================================================================
    // Product Commands
    // =========================================================================

    /// Adds a product: fresh id, appended last.
    pub fn add_product(&mut self, draft: NewProduct) -> Product {
        let product = Product {
            id: fresh_id(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            tax_percent: draft.tax_percent,
            sku: draft.sku,
        };
        debug!(id = %product.id, "add_product");
        self.products.push(product.clone());
        product
    }

    /// Merges a patch into the matching product. No-op if the id is unknown.
    ///
    /// Invoice lines that referenced this product keep their frozen copy of
    /// name/price/tax - a price change here never rewrites history.
    pub fn update_product(&mut self, id: &str, patch: ProductPatch) {
        debug!(%id, "update_product");
        if let Some(product) = self.products.iter_mut().find(|p| p.id == id) {
            patch.apply(product);
        }
    }

    /// Removes the matching product. No-op if the id is unknown.
    pub fn delete_product(&mut self, id: &str) {
        debug!(%id, "delete_product");
        self.products.retain(|p| p.id != id);
    }

    // =========================================================================
    // Invoice Commands
    // =========================================================================

    /// Adds an invoice: fresh id, next sequential `INV-NNN`, today's date.
    ///
    /// The counter is consumed unconditionally; deleting invoices later
    /// never frees or reassigns a number.
    pub fn add_invoice(&mut self, draft: NewInvoice) -> Invoice {
        let seq = self.next_invoice_num;
        self.next_invoice_num += 1;

        let invoice = Invoice {
            id: fresh_id(),
            invoice_number: invoice_number(seq),
            customer_id: draft.customer_id,
            customer_name: draft.customer_name,
            items: draft.items,
            status: draft.status,
            due_date: draft.due_date,
            created_at: today(),
            notes: draft.notes,
        };
        debug!(id = %invoice.id, number = %invoice.invoice_number, "add_invoice");
        self.invoices.push(invoice.clone());
        invoice
    }

    /// Merges a patch into the matching invoice. No-op if the id is unknown.
    ///
    /// `id`, `invoice_number` and `created_at` are never reassigned - the
    /// patch type has no fields for them.
    pub fn update_invoice(&mut self, id: &str, patch: InvoicePatch) {
        debug!(%id, "update_invoice");
        if let Some(invoice) = self.invoices.iter_mut().find(|i| i.id == id) {
            patch.apply(invoice);
        }
    }

    /// Removes the matching invoice. No-op if the id is unknown.
    /// The counter is unaffected (never decremented).
    pub fn delete_invoice(&mut self, id: &str) {
        debug!(%id, "delete_invoice");
        self.invoices.retain(|i| i.id != id);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
