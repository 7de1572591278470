//! # quill-core: Pure Business Logic for Quill Invoice
//!
//! This crate is the **heart** of Quill Invoice. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Quill Invoice Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (TypeScript)                          │   │
//! │  │   Customer Forms ──► Invoice Editor ──► Dashboard ──► Reports  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ command / query surface                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 quill-store (Domain Store)                      │   │
//! │  │    add/update/delete per entity, JSON snapshot persistence      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ quill-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  totals   │  │  reports  │  │ validation│  │   │
//! │  │   │  Customer │  │ subtotal  │  │  monthly  │  │   rules   │  │   │
//! │  │   │  Invoice  │  │ tax/total │  │  revenue  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO PERSISTENCE • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, Product, Invoice, patches)
//! - [`totals`] - The invoice calculator (subtotal / tax / total)
//! - [`reports`] - Pure aggregation for the dashboard and reports views
//! - [`validation`] - Business rule validation (caller-side)
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Persistence, network and clock access are FORBIDDEN here
//! 3. **Decimal Money**: All monetary values use `rust_decimal::Decimal`,
//!    never `f64`, so currency display never shows rounding drift
//! 4. **Derived Totals**: An invoice total is never stored; it is always
//!    recomputed from the line items through [`totals`]
//!
//! ## Example Usage
//!
//! ```rust
//! use quill_core::types::InvoiceItem;
//! use quill_core::totals;
//! use rust_decimal::Decimal;
//!
//! let items = vec![InvoiceItem {
//!     product_id: String::new(),
//!     name: "Consulting".to_string(),
//!     quantity: 2,
//!     price: Decimal::new(15000, 2), // 150.00
//!     discount: Decimal::ZERO,
//!     tax_percent: Decimal::new(10, 0),
//! }];
//!
//! assert_eq!(totals::subtotal(&items), Decimal::new(30000, 2));
//! assert_eq!(totals::total(&items), Decimal::new(33000, 2));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod reports;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use quill_core::Invoice` instead of
// `use quill_core::types::Invoice`

pub use error::{ValidationError, ValidationResult};
pub use totals::InvoiceTotals;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Prefix for human-readable invoice numbers (`INV-001`, `INV-002`, ...).
pub const INVOICE_NUMBER_PREFIX: &str = "INV-";

/// Minimum zero-padded width of the sequential part of an invoice number.
///
/// ## Why a minimum, not a fixed width?
/// Numbers up to 999 render as `INV-007`; from 1000 on, the number widens
/// (`INV-1000`) instead of truncating. Sequences are never reused, so a
/// long-lived store will eventually cross this boundary.
pub const INVOICE_NUMBER_PAD: usize = 3;
