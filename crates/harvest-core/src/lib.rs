//! # harvest-core: Invoicing Logic for the Harvest Dashboard
//!
//! Pure functions behind the order and procurement invoice pages: line totals,
//! CGST/SGST, delivery fees, grand totals, amount-in-words and the printed
//! tax invoice.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │             Backend REST payloads (orders, procurements)        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ harvest-backend normalizes            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ harvest-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  invoice  │  │   words   │  │  printed  │  │   │
//! │  │   │ LineItem  │  │  Totals   │  │  Rupees & │  │    Tax    │  │   │
//! │  │   │   Order   │  │Invoiceable│  │   Paise   │  │  Invoice  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO LOGGING • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/harvest-cli (front end)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Line items, orders, procurements, tax rates
//! - [`coerce`] - Lenient number coercion (malformed becomes zero)
//! - [`invoice`] - Invoice totals for orders and procurements
//! - [`words`] - Amount-in-words in rupees and paise
//! - [`summary`] - List totals, filtering and sorting
//! - [`printed`] - Plain-text tax invoice
//! - [`money`] - Display-side money in paise
//! - [`validation`] - Seller and layout checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use harvest_core::invoice::procurement_totals;
//! use harvest_core::types::{LineItem, TaxRates};
//! use harvest_core::words::amount_to_words;
//!
//! let items = vec![LineItem::new(2.0, 50.0)];
//! let totals = procurement_totals(&items, TaxRates::new(5.0, 5.0), 10.0);
//!
//! assert_eq!(totals.grand_total_money().to_string(), "₹120.00");
//! assert_eq!(
//!     amount_to_words(totals.grand_total).unwrap(),
//!     "One Hundred Twenty Rupees"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod coerce;
pub mod error;
pub mod invoice;
pub mod money;
pub mod printed;
pub mod summary;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{order_totals, procurement_totals, Invoiceable, InvoiceTotals, LineTotalSource};
pub use money::Money;
pub use printed::{PrintOptions, Seller, TaxInvoice};
pub use summary::{InvoiceSummary, SortOrder};
pub use types::*;
pub use words::{amount_to_words, amount_to_words_with, ScaleGrouping};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency symbol printed before every amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Default printed invoice width, in columns.
pub const DEFAULT_INVOICE_WIDTH: usize = 48;

/// Narrowest printable invoice (two-column totals need room).
pub const MIN_INVOICE_WIDTH: usize = 32;

/// Widest printable invoice.
pub const MAX_INVOICE_WIDTH: usize = 120;
