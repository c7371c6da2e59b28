//! # harvest-backend: REST Payload Adapters
//!
//! The dashboard backend is inconsistent across endpoints: ids arrive as
//! numbers or strings under several names, numbers arrive as strings, list
//! responses come in different envelopes, and procurement items may be a
//! JSON-encoded string. This crate absorbs all of that in one place and hands
//! canonical `harvest-core` types to everything else.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   raw JSON ──► envelope::list_items ──┬──► order       ──► Order        │
//! │                fields::first_text     ├──► procurement ──► Procurement  │
//! │                                       ├──► category    ──► Category     │
//! │                                       └──► vendor      ──► Vendor       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//!
//! Only JSON that cannot be parsed at all, or a document that is not an
//! object, is an error. Malformed fields are coerced to zero or dropped and
//! logged at `warn`.
//!
//! ## Example
//!
//! ```rust
//! use harvest_backend::procurement::parse_procurement;
//! use harvest_core::invoice::{Invoiceable, LineTotalSource};
//!
//! let procurement = parse_procurement(r#"{"id": 1, "items": "{not valid json"}"#).unwrap();
//! assert!(procurement.items.is_empty());
//! assert_eq!(procurement.totals(LineTotalSource::default()).grand_total, 0.0);
//! ```

pub mod category;
pub mod envelope;
pub mod error;
pub mod fields;
pub mod order;
pub mod procurement;
pub mod vendor;

pub use category::{parse_categories, Category};
pub use error::{BackendError, BackendResult};
pub use order::{parse_order, parse_orders};
pub use procurement::{parse_procurement, parse_procurements};
pub use vendor::{parse_vendors, Vendor};
