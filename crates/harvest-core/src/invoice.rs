//! # Invoice Total Calculator
//!
//! Subtotal, CGST, SGST, delivery fees and grand total for orders and
//! procurement requests.
//!
//! ## Two Calling Conventions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ORDER-STYLE (tax/fee on each line's product)                           │
//! │                                                                         │
//! │    subtotal     = Σ lineTotal_i                                         │
//! │    cgst         = Σ lineTotal_i × product_i.cgst / 100                  │
//! │    sgst         = Σ lineTotal_i × product_i.sgst / 100                  │
//! │    delivery     = Σ product_i.delivery_fee                              │
//! │                                                                         │
//! │  PROCUREMENT-STYLE (tax/fee once, on the document)                      │
//! │                                                                         │
//! │    subtotal     = Σ quantity_i × unitPrice_i                            │
//! │    cgst         = subtotal × cgstRate / 100                             │
//! │    sgst         = subtotal × sgstRate / 100                             │
//! │    delivery     = document.delivery_fee                                 │
//! │                                                                         │
//! │  BOTH: grand = subtotal + cgst + sgst + delivery                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//! - Total function: never panics, never returns an error.
//! - Non-finite inputs read as zero, so no NaN reaches a display.
//! - A product join miss (`LineItem::product == None`) adds no tax or fee.
//! - A document with no items totals to zero in every field, the
//!   document-level delivery fee included.
//! - Accumulation stays in `f64`; rounding to paise happens in
//!   [`InvoiceTotals::grand_total_money`] and friends.
//!
//! ## Example
//! ```rust
//! use harvest_core::invoice::procurement_totals;
//! use harvest_core::types::{LineItem, TaxRates};
//!
//! let items = vec![LineItem::new(2.0, 50.0)];
//! let totals = procurement_totals(&items, TaxRates::new(5.0, 5.0), 10.0);
//!
//! assert_eq!(totals.subtotal, 100.0);
//! assert_eq!(totals.grand_total_money().to_string(), "₹120.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::coerce::finite_or_zero;
use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{LineItem, Order, Procurement, TaxRates};

// =============================================================================
// Line Total Precedence
// =============================================================================

/// Which figure wins when a line carries a stored `line_total` that differs
/// from `quantity × unit_price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LineTotalSource {
    /// Use the stored total when it is a finite number, otherwise derive it.
    #[default]
    PreferStored,
    /// Always derive `quantity × unit_price`.
    Recompute,
}

impl LineTotalSource {
    /// Resolves the line total for one item.
    pub fn line_total(&self, item: &LineItem) -> f64 {
        match self {
            LineTotalSource::PreferStored => item
                .stored_line_total()
                .unwrap_or_else(|| item.computed_line_total()),
            LineTotalSource::Recompute => item.computed_line_total(),
        }
    }
}

impl fmt::Display for LineTotalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineTotalSource::PreferStored => write!(f, "prefer_stored"),
            LineTotalSource::Recompute => write!(f, "recompute"),
        }
    }
}

impl FromStr for LineTotalSource {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prefer_stored" | "stored" => Ok(LineTotalSource::PreferStored),
            "recompute" | "derived" => Ok(LineTotalSource::Recompute),
            other => Err(ValidationError::InvalidFormat {
                field: "line_total_source".to_string(),
                reason: format!("unknown value '{}', expected prefer_stored or recompute", other),
            }),
        }
    }
}

// =============================================================================
// Invoice Totals
// =============================================================================

/// Full-precision totals for one document.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub cgst_amount: f64,
    pub sgst_amount: f64,
    pub delivery_fee: f64,
    pub grand_total: f64,
}

impl InvoiceTotals {
    /// Builds totals from their parts; the grand total is derived.
    fn from_parts(subtotal: f64, cgst_amount: f64, sgst_amount: f64, delivery_fee: f64) -> Self {
        let subtotal = finite_or_zero(subtotal);
        let cgst_amount = finite_or_zero(cgst_amount);
        let sgst_amount = finite_or_zero(sgst_amount);
        let delivery_fee = finite_or_zero(delivery_fee);

        InvoiceTotals {
            subtotal,
            cgst_amount,
            sgst_amount,
            delivery_fee,
            grand_total: finite_or_zero(subtotal + cgst_amount + sgst_amount + delivery_fee),
        }
    }

    pub fn subtotal_money(&self) -> Money {
        Money::from_amount(self.subtotal)
    }

    pub fn cgst_money(&self) -> Money {
        Money::from_amount(self.cgst_amount)
    }

    pub fn sgst_money(&self) -> Money {
        Money::from_amount(self.sgst_amount)
    }

    pub fn delivery_fee_money(&self) -> Money {
        Money::from_amount(self.delivery_fee)
    }

    /// Grand total rounded to paise, ready for display.
    pub fn grand_total_money(&self) -> Money {
        Money::from_amount(self.grand_total)
    }
}

// =============================================================================
// Calculators
// =============================================================================

/// Order-style totals: tax rates and delivery fee come from each line's
/// joined product.
pub fn order_totals(items: &[LineItem], source: LineTotalSource) -> InvoiceTotals {
    if items.is_empty() {
        return InvoiceTotals::default();
    }

    let mut subtotal = 0.0;
    let mut cgst_amount = 0.0;
    let mut sgst_amount = 0.0;
    let mut delivery_fee = 0.0;

    for item in items {
        let line_total = source.line_total(item);
        let charges = item.charges();

        subtotal += line_total;
        cgst_amount += finite_or_zero(line_total * finite_or_zero(charges.cgst) / 100.0);
        sgst_amount += finite_or_zero(line_total * finite_or_zero(charges.sgst) / 100.0);
        delivery_fee += finite_or_zero(charges.delivery_fee);
    }

    InvoiceTotals::from_parts(subtotal, cgst_amount, sgst_amount, delivery_fee)
}

/// Procurement-style totals: one rate pair and one flat delivery fee for the
/// whole document. Line totals are always `quantity × unit_price`.
pub fn procurement_totals(items: &[LineItem], rates: TaxRates, delivery_fee: f64) -> InvoiceTotals {
    if items.is_empty() {
        return InvoiceTotals::default();
    }

    let subtotal: f64 = items.iter().map(LineItem::computed_line_total).sum();
    let cgst_amount = subtotal * finite_or_zero(rates.cgst) / 100.0;
    let sgst_amount = subtotal * finite_or_zero(rates.sgst) / 100.0;

    InvoiceTotals::from_parts(subtotal, cgst_amount, sgst_amount, delivery_fee)
}

// =============================================================================
// Invoiceable Documents
// =============================================================================

/// A document that can be totalled and printed.
pub trait Invoiceable {
    /// Number printed on the invoice.
    fn document_number(&self) -> &str;

    /// Customer or vendor the invoice is addressed to.
    fn counterparty(&self) -> Option<&str>;

    fn items(&self) -> &[LineItem];

    /// Line total used when printing `item`.
    fn line_total(&self, item: &LineItem, source: LineTotalSource) -> f64;

    fn totals(&self, source: LineTotalSource) -> InvoiceTotals;
}

impl Invoiceable for Order {
    fn document_number(&self) -> &str {
        &self.order_id
    }

    fn counterparty(&self) -> Option<&str> {
        self.customer_name.as_deref()
    }

    fn items(&self) -> &[LineItem] {
        &self.items
    }

    fn line_total(&self, item: &LineItem, source: LineTotalSource) -> f64 {
        source.line_total(item)
    }

    fn totals(&self, source: LineTotalSource) -> InvoiceTotals {
        order_totals(&self.items, source)
    }
}

impl Invoiceable for Procurement {
    fn document_number(&self) -> &str {
        &self.procurement_id
    }

    fn counterparty(&self) -> Option<&str> {
        self.vendor_name.as_deref()
    }

    fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Procurement lines never trust a stored total.
    fn line_total(&self, item: &LineItem, _source: LineTotalSource) -> f64 {
        item.computed_line_total()
    }

    fn totals(&self, _source: LineTotalSource) -> InvoiceTotals {
        procurement_totals(&self.items, self.rates, self.delivery_fee)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductCharges;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_procurement_scenario_with_tax_and_fee() {
        let items = vec![LineItem::new(2.0, 50.0)];
        let totals = procurement_totals(&items, TaxRates::new(5.0, 5.0), 10.0);

        assert!(approx(totals.subtotal, 100.0));
        assert!(approx(totals.cgst_amount, 5.0));
        assert!(approx(totals.sgst_amount, 5.0));
        assert!(approx(totals.grand_total, 120.0));
        assert_eq!(totals.grand_total_money().to_string(), "₹120.00");
    }

    #[test]
    fn test_procurement_scenario_fractional_price() {
        let items = vec![LineItem::new(3.0, 33.33)];
        let totals = procurement_totals(&items, TaxRates::zero(), 0.0);

        assert_eq!(totals.subtotal_money().paise(), 9999);
        assert_eq!(totals.grand_total_money().to_string(), "₹99.99");
    }

    #[test]
    fn test_order_style_per_product_charges() {
        let items = vec![
            LineItem::new(2.0, 50.0).with_product(ProductCharges::new(5.0, 5.0, 10.0)),
            LineItem::new(1.0, 200.0).with_product(ProductCharges::new(9.0, 9.0, 0.0)),
        ];
        let totals = order_totals(&items, LineTotalSource::default());

        assert!(approx(totals.subtotal, 300.0));
        assert!(approx(totals.cgst_amount, 5.0 + 18.0));
        assert!(approx(totals.sgst_amount, 5.0 + 18.0));
        assert!(approx(totals.delivery_fee, 10.0));
        assert!(approx(totals.grand_total, 356.0));
    }

    #[test]
    fn test_order_style_join_miss_contributes_no_tax_or_fee() {
        let items = vec![
            LineItem::new(1.0, 100.0),
            LineItem::new(1.0, 100.0).with_product(ProductCharges::new(5.0, 5.0, 20.0)),
        ];
        let totals = order_totals(&items, LineTotalSource::default());

        assert!(approx(totals.subtotal, 200.0));
        assert!(approx(totals.cgst_amount + totals.sgst_amount, 10.0));
        assert!(approx(totals.delivery_fee, 20.0));
        assert!(approx(totals.grand_total, 230.0));
    }

    #[test]
    fn test_line_total_precedence() {
        let item = LineItem::new(2.0, 50.0).with_line_total(90.0);

        assert_eq!(LineTotalSource::PreferStored.line_total(&item), 90.0);
        assert_eq!(LineTotalSource::Recompute.line_total(&item), 100.0);

        let no_stored = LineItem::new(2.0, 50.0);
        assert_eq!(LineTotalSource::PreferStored.line_total(&no_stored), 100.0);
    }

    #[test]
    fn test_procurement_ignores_stored_line_total() {
        let items = vec![LineItem::new(2.0, 50.0).with_line_total(1.0)];
        let totals = procurement_totals(&items, TaxRates::zero(), 0.0);
        assert!(approx(totals.subtotal, 100.0));
    }

    #[test]
    fn test_empty_items_total_zero() {
        assert_eq!(order_totals(&[], LineTotalSource::default()), InvoiceTotals::default());

        // The document-level fee does not apply to an empty request
        let totals = procurement_totals(&[], TaxRates::new(5.0, 5.0), 25.0);
        assert_eq!(totals, InvoiceTotals::default());
        assert_eq!(totals.grand_total_money().to_string(), "₹0.00");
    }

    #[test]
    fn test_non_finite_inputs_do_not_poison_totals() {
        let items = vec![
            LineItem::new(1.0, f64::NAN),
            LineItem::new(2.0, 10.0)
                .with_product(ProductCharges::new(f64::INFINITY, 5.0, f64::NAN)),
        ];
        let totals = order_totals(&items, LineTotalSource::Recompute);

        assert!(approx(totals.subtotal, 20.0));
        assert!(approx(totals.cgst_amount, 0.0));
        assert!(approx(totals.sgst_amount, 1.0));
        assert!(approx(totals.grand_total, 21.0));

        let totals = procurement_totals(&items, TaxRates::new(f64::NAN, 0.0), f64::INFINITY);
        assert!(approx(totals.grand_total, 20.0));
    }

    #[test]
    fn test_reordering_items_keeps_grand_total() {
        let mut items = vec![
            LineItem::new(3.0, 12.35).with_product(ProductCharges::new(2.5, 2.5, 5.0)),
            LineItem::new(0.75, 88.8).with_product(ProductCharges::new(6.0, 6.0, 0.0)),
            LineItem::new(12.0, 0.99),
        ];
        let forward = order_totals(&items, LineTotalSource::default());
        items.reverse();
        let backward = order_totals(&items, LineTotalSource::default());

        assert_eq!(forward.grand_total_money(), backward.grand_total_money());
        assert!((forward.grand_total - backward.grand_total).abs() < 1e-6);
    }

    #[test]
    fn test_invoiceable_dispatch() {
        let order = Order::new(
            "ORD-1",
            vec![LineItem::new(2.0, 50.0).with_product(ProductCharges::new(5.0, 5.0, 10.0))],
        );
        let procurement = Procurement::new(
            "PR-1",
            vec![LineItem::new(2.0, 50.0)],
            TaxRates::new(5.0, 5.0),
            10.0,
        );

        assert_eq!(order.document_number(), "ORD-1");
        assert_eq!(procurement.document_number(), "PR-1");
        assert_eq!(
            order.totals(LineTotalSource::default()).grand_total_money(),
            procurement.totals(LineTotalSource::default()).grand_total_money()
        );
    }

    #[test]
    fn test_line_total_source_parsing() {
        assert_eq!("prefer_stored".parse::<LineTotalSource>().unwrap(), LineTotalSource::PreferStored);
        assert_eq!("Recompute".parse::<LineTotalSource>().unwrap(), LineTotalSource::Recompute);
        assert!("sometimes".parse::<LineTotalSource>().is_err());
        assert_eq!(LineTotalSource::Recompute.to_string(), "recompute");
    }
}
