//! # Domain Types
//!
//! Invoiceable documents and their line items, in the shape the calculator
//! reads them. Backend payloads are mapped into these once, by
//! `harvest-backend`; nothing here knows about field-name variants.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────────┐        ┌─────────────────────────────┐    │
//! │  │   Order                 │        │   Procurement               │    │
//! │  │  ─────────────────────  │        │  ─────────────────────────  │    │
//! │  │  order_id               │        │  procurement_id, vendor     │    │
//! │  │  customer_name          │        │  rates (CGST%, SGST%)       │    │
//! │  │  items ────────┐        │        │  delivery_fee (flat)        │    │
//! │  └────────────────┼────────┘        │  items ────────┐            │    │
//! │                   │                 └────────────────┼────────────┘    │
//! │                   ▼                                  ▼                  │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   LineItem                                                      │   │
//! │  │   quantity, unit_price, line_total?                             │   │
//! │  │   product? ──► ProductCharges { cgst, sgst, delivery_fee }      │   │
//! │  │               (order-style only; None = product join miss)      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::coerce::finite_or_zero;

// =============================================================================
// Tax Rates
// =============================================================================

/// CGST and SGST as plain percentages (5.0 = 5%).
///
/// Range is not enforced; the calculator only treats non-finite values as
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRates {
    pub cgst: f64,
    pub sgst: f64,
}

impl TaxRates {
    /// Creates a rate pair.
    #[inline]
    pub const fn new(cgst: f64, sgst: f64) -> Self {
        TaxRates { cgst, sgst }
    }

    /// No tax.
    #[inline]
    pub const fn zero() -> Self {
        TaxRates::new(0.0, 0.0)
    }
}

// =============================================================================
// Product Charges
// =============================================================================

/// Tax and delivery charges attached to a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductCharges {
    /// CGST percentage.
    pub cgst: f64,
    /// SGST percentage.
    pub sgst: f64,
    /// Flat delivery fee charged once per line carrying this product.
    pub delivery_fee: f64,
}

impl ProductCharges {
    pub const fn new(cgst: f64, sgst: f64, delivery_fee: f64) -> Self {
        ProductCharges {
            cgst,
            sgst,
            delivery_fee,
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product line within an order or procurement request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Catalog product this line refers to, when known.
    pub product_id: Option<String>,

    /// Product name for printing.
    pub name: Option<String>,

    pub quantity: f64,

    /// Price per unit.
    pub unit_price: f64,

    /// Stored `quantity × unit_price`, when the backend sent one.
    pub line_total: Option<f64>,

    /// Joined product charges. `None` means the product lookup missed.
    pub product: Option<ProductCharges>,
}

impl LineItem {
    /// Creates a line from quantity and unit price only.
    pub fn new(quantity: f64, unit_price: f64) -> Self {
        LineItem {
            quantity,
            unit_price,
            ..LineItem::default()
        }
    }

    /// Sets the stored line total.
    pub fn with_line_total(mut self, line_total: f64) -> Self {
        self.line_total = Some(line_total);
        self
    }

    /// Attaches joined product charges.
    pub fn with_product(mut self, product: ProductCharges) -> Self {
        self.product = Some(product);
        self
    }

    /// Sets the product id and display name.
    pub fn with_name(mut self, product_id: impl Into<String>, name: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self.name = Some(name.into());
        self
    }

    /// `quantity × unit_price`, with non-finite inputs read as zero.
    #[inline]
    pub fn computed_line_total(&self) -> f64 {
        finite_or_zero(finite_or_zero(self.quantity) * finite_or_zero(self.unit_price))
    }

    /// Stored line total if it is a finite number.
    #[inline]
    pub fn stored_line_total(&self) -> Option<f64> {
        self.line_total.filter(|total| total.is_finite())
    }

    /// Charges of the joined product, zero on a join miss.
    #[inline]
    pub fn charges(&self) -> ProductCharges {
        self.product.unwrap_or_default()
    }
}

// =============================================================================
// Documents
// =============================================================================

/// A customer order. Tax and delivery fee live on each line's product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub order_id: String,
    pub customer_name: Option<String>,
    pub items: Vec<LineItem>,
}

impl Order {
    pub fn new(order_id: impl Into<String>, items: Vec<LineItem>) -> Self {
        Order {
            order_id: order_id.into(),
            customer_name: None,
            items,
        }
    }
}

/// A procurement request to a vendor or farmer. Tax and delivery fee are
/// stored once on the document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Procurement {
    pub procurement_id: String,
    pub vendor_name: Option<String>,
    pub items: Vec<LineItem>,
    pub rates: TaxRates,
    pub delivery_fee: f64,
}

impl Procurement {
    pub fn new(
        procurement_id: impl Into<String>,
        items: Vec<LineItem>,
        rates: TaxRates,
        delivery_fee: f64,
    ) -> Self {
        Procurement {
            procurement_id: procurement_id.into(),
            vendor_name: None,
            items,
            rates,
            delivery_fee,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computed_line_total() {
        assert_eq!(LineItem::new(2.0, 50.0).computed_line_total(), 100.0);
        assert_eq!(LineItem::new(f64::NAN, 50.0).computed_line_total(), 0.0);
        assert_eq!(LineItem::new(1e308, 1e308).computed_line_total(), 0.0);
    }

    #[test]
    fn test_stored_line_total_ignores_non_finite() {
        let item = LineItem::new(1.0, 1.0).with_line_total(f64::NAN);
        assert_eq!(item.stored_line_total(), None);

        let item = LineItem::new(1.0, 1.0).with_line_total(42.0);
        assert_eq!(item.stored_line_total(), Some(42.0));
    }

    #[test]
    fn test_charges_default_on_join_miss() {
        let item = LineItem::new(1.0, 10.0);
        assert_eq!(item.charges(), ProductCharges::default());

        let item = item.with_product(ProductCharges::new(2.5, 2.5, 15.0));
        assert_eq!(item.charges().cgst, 2.5);
        assert_eq!(item.charges().delivery_fee, 15.0);
    }
}
