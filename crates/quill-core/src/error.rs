//! # Error Types
//!
//! Validation error types for quill-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quill-core errors (this file)                                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  quill-store errors (separate crate)                                   │
//! │  └── StoreError       - Snapshot persistence failures                  │
//! │                                                                         │
//! │  Flow: ValidationError stops a command BEFORE it reaches the store;    │
//! │  the store itself accepts any well-typed payload. The totals           │
//! │  calculator has no error type at all - it may never fail.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, bounds)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements. The calling
/// layer surfaces them as transient notifications; a rejected payload
/// never reaches the store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Percentage value is outside 0-100.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::OutOfRange {
            field: "taxPercent".to_string(),
            min: 0,
            max: 100,
        };
        assert_eq!(err.to_string(), "taxPercent must be between 0 and 100");
    }
}
