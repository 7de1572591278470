//! # Validation Module
//!
//! Input validation for Quill Invoice.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback (transient toast)                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust, before any command is issued)             │
//! │  ├── Required fields (customer name+email, item name)                  │
//! │  ├── Numeric ranges (positive quantity, percent in 0-100)              │
//! │  └── Reference presence (invoice needs a selected customer)            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Domain Store                                                 │
//! │  └── NONE BY DESIGN. The store accepts any well-typed payload;         │
//! │      keeping it clean is the caller's contract.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quill_core::types::NewCustomer;
//! use quill_core::validation::validate_customer;
//!
//! let draft = NewCustomer {
//!     name: "Acme Corp".to_string(),
//!     email: "billing@acme.com".to_string(),
//!     phone: String::new(),
//!     address: String::new(),
//!     gst_id: String::new(),
//! };
//! assert!(validate_customer(&draft).is_ok());
//! ```

use rust_decimal::Decimal;

use crate::error::{ValidationError, ValidationResult};
use crate::types::{InvoiceItem, NewCustomer, NewInvoice, NewProduct};

// =============================================================================
// Field Helpers
// =============================================================================

/// Checks that a text field is non-empty after trimming.
fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Checks that a percentage value lies in 0-100.
fn validate_percent(field: &str, value: Decimal) -> ValidationResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 100,
        });
    }
    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a customer draft.
///
/// ## Rules
/// - Name and email are required non-empty
/// - Email must at least look like an address (contains `@`)
pub fn validate_customer(draft: &NewCustomer) -> ValidationResult<()> {
    require("name", &draft.name)?;
    require("email", &draft.email)?;

    if !draft.email.contains('@') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "expected an email address".to_string(),
        });
    }

    Ok(())
}

/// Validates a product draft.
///
/// ## Rules
/// - Name is required non-empty
/// - Price must not be negative
/// - Tax percent must lie in 0-100
pub fn validate_product(draft: &NewProduct) -> ValidationResult<()> {
    require("name", &draft.name)?;

    if draft.price < Decimal::ZERO {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    validate_percent("taxPercent", draft.tax_percent)
}

/// Validates a single invoice line.
///
/// ## Rules
/// - Display name is required (mirrors the form's "Fill all item details")
/// - Quantity must be strictly positive
/// - Discount and tax percent must lie in 0-100
pub fn validate_item(item: &InvoiceItem) -> ValidationResult<()> {
    require("name", &item.name)?;

    if item.quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if item.price < Decimal::ZERO {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    validate_percent("discount", item.discount)?;
    validate_percent("taxPercent", item.tax_percent)
}

/// Validates an invoice draft before it is handed to the store.
///
/// ## Rules
/// - A customer must be selected
/// - At least one line item
/// - Every line passes [`validate_item`]
pub fn validate_invoice(draft: &NewInvoice) -> ValidationResult<()> {
    require("customerId", &draft.customer_id)?;

    if draft.items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    for item in &draft.items {
        validate_item(item)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
