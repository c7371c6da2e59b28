//! # Error Types
//!
//! Domain-specific error types for harvest-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  harvest-core errors (this file)                                       │
//! │  ├── CoreError        - Amounts that cannot go on a legal document     │
//! │  └── ValidationError  - Seller/config input failures                   │
//! │                                                                         │
//! │  harvest-backend errors (separate crate)                               │
//! │  └── BackendError     - Payload is not JSON at all                     │
//! │                                                                         │
//! │  harvest-cli errors (in app)                                           │
//! │  └── ConfigError      - Config file / environment problems             │
//! │                                                                         │
//! │  NOT errors: non-numeric fields, missing products, bad `items` JSON.   │
//! │  Those coerce to zero / empty and never reach this file.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Totals never fail. These variants only come out of the amount-in-words
/// conversion and printed invoice rendering, where a wrong string would end
/// up on a financial document.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Amount is below zero.
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(f64),

    /// Amount is NaN or infinite.
    #[error("Amount must be a finite number")]
    NonFiniteAmount,

    /// Amount has no scale word available.
    ///
    /// ## When This Occurs
    /// The scale table stops at Crore, so anything with a fifth
    /// thousand-group would have nothing to print.
    #[error("Amount {amount} exceeds the largest amount that can be written in words ({max})")]
    AmountTooLarge { amount: f64, max: f64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for seller details and invoice layout settings before any invoice
/// gets printed.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed GSTIN).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
