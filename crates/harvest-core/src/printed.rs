//! # Printed Tax Invoice
//!
//! Lays out a plain-text tax invoice for an order or procurement request,
//! ending with the grand total written in words.
//!
//! ## Layout (48 columns)
//! ```text
//!               GREEN VALLEY PRODUCE
//!                  12 Market Road
//!              GSTIN: 27AAPFU0939F1ZV
//! ================================================
//!                    TAX INVOICE
//! ================================================
//! Invoice No: PR-1001             Date: 19-10-2026
//! Bill To: Sunrise Farms
//! ------------------------------------------------
//! Tomatoes
//!   2 x ₹50.00                             ₹100.00
//! ------------------------------------------------
//! Subtotal                                 ₹100.00
//! CGST                                       ₹5.00
//! SGST                                       ₹5.00
//! Delivery Fee                              ₹10.00
//! ================================================
//! GRAND TOTAL                              ₹120.00
//! ================================================
//! Amount in words:
//! One Hundred Twenty Rupees
//! ```
//!
//! Building the invoice validates the seller details and width, and writes
//! the words from the rounded grand total so the figure and the words always
//! agree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::invoice::{Invoiceable, InvoiceTotals, LineTotalSource};
use crate::money::Money;
use crate::validation::{validate_gstin, validate_invoice_width, validate_seller_name};
use crate::words::{amount_to_words_with, ScaleGrouping};
use crate::DEFAULT_INVOICE_WIDTH;

/// Date format printed on invoices (day-month-year).
const DATE_FORMAT: &str = "%d-%m-%Y";

// =============================================================================
// Inputs
// =============================================================================

/// The business issuing the invoice.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Seller {
    pub name: String,
    pub address: Vec<String>,
    pub gstin: Option<String>,
}

/// Layout and wording choices for printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Line width in columns.
    pub width: usize,
    pub grouping: ScaleGrouping,
    pub line_total: LineTotalSource,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            width: DEFAULT_INVOICE_WIDTH,
            grouping: ScaleGrouping::default(),
            line_total: LineTotalSource::default(),
        }
    }
}

// =============================================================================
// Tax Invoice
// =============================================================================

/// One printed item row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceLine {
    pub description: String,
    pub quantity: f64,
    pub unit_price: Money,
    pub line_total: Money,
}

/// A fully prepared tax invoice, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxInvoice {
    pub seller: Seller,
    pub invoice_number: String,
    #[ts(as = "String")]
    pub issued_on: NaiveDate,
    pub bill_to: Option<String>,
    pub lines: Vec<InvoiceLine>,
    pub totals: InvoiceTotals,
    pub amount_in_words: String,
    pub width: usize,
}

impl TaxInvoice {
    /// Prepares an invoice for `document`.
    ///
    /// ## Errors
    /// - Seller name missing or too long, GSTIN malformed, width out of range
    /// - Grand total cannot be written in words (too large)
    pub fn build<D: Invoiceable>(
        document: &D,
        seller: &Seller,
        issued_on: NaiveDate,
        options: &PrintOptions,
    ) -> CoreResult<Self> {
        validate_seller_name(&seller.name)?;
        if let Some(gstin) = &seller.gstin {
            validate_gstin(gstin)?;
        }
        validate_invoice_width(options.width)?;

        let totals = document.totals(options.line_total);
        let amount_in_words =
            amount_to_words_with(totals.grand_total_money().to_amount(), options.grouping)?;

        let lines = document
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| InvoiceLine {
                description: item
                    .name
                    .clone()
                    .or_else(|| item.product_id.clone())
                    .unwrap_or_else(|| format!("Item {}", index + 1)),
                quantity: item.quantity,
                unit_price: Money::from_amount(item.unit_price),
                line_total: Money::from_amount(document.line_total(item, options.line_total)),
            })
            .collect();

        Ok(TaxInvoice {
            seller: seller.clone(),
            invoice_number: document.document_number().to_string(),
            issued_on,
            bill_to: document.counterparty().map(str::to_string),
            lines,
            totals,
            amount_in_words,
            width: options.width,
        })
    }

    /// Renders the invoice as plain text, one `\n`-terminated line each.
    pub fn render(&self) -> String {
        let width = self.width;
        let heavy = "=".repeat(width);
        let light = "-".repeat(width);
        let mut out: Vec<String> = Vec::new();

        // Header
        for line in wrap(&self.seller.name.to_uppercase(), width) {
            out.push(center(&line, width));
        }
        for address_line in &self.seller.address {
            for line in wrap(address_line, width) {
                out.push(center(&line, width));
            }
        }
        if let Some(gstin) = &self.seller.gstin {
            out.push(center(&format!("GSTIN: {}", gstin.trim()), width));
        }
        out.push(heavy.clone());
        out.push(center("TAX INVOICE", width));
        out.push(heavy.clone());

        out.push(two_column(
            &format!("Invoice No: {}", self.invoice_number),
            &format!("Date: {}", self.issued_on.format(DATE_FORMAT)),
            width,
        ));
        if let Some(bill_to) = &self.bill_to {
            out.extend(wrap(&format!("Bill To: {}", bill_to), width));
        }
        out.push(light.clone());

        // Items
        for line in &self.lines {
            out.extend(wrap(&line.description, width));
            out.push(two_column(
                &format!("  {} x {}", format_quantity(line.quantity), line.unit_price),
                &line.line_total.to_string(),
                width,
            ));
        }
        out.push(light);

        // Totals
        out.push(two_column("Subtotal", &self.totals.subtotal_money().to_string(), width));
        out.push(two_column("CGST", &self.totals.cgst_money().to_string(), width));
        out.push(two_column("SGST", &self.totals.sgst_money().to_string(), width));
        out.push(two_column(
            "Delivery Fee",
            &self.totals.delivery_fee_money().to_string(),
            width,
        ));
        out.push(heavy.clone());
        out.push(two_column(
            "GRAND TOTAL",
            &self.totals.grand_total_money().to_string(),
            width,
        ));
        out.push(heavy);

        out.push("Amount in words:".to_string());
        out.extend(wrap(&self.amount_in_words, width));

        let mut text = out.join("\n");
        text.push('\n');
        text
    }
}

// =============================================================================
// Layout Helpers
// =============================================================================

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Centers `text`, without trailing padding.
fn center(text: &str, width: usize) -> String {
    let len = char_len(text);
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((width - len) / 2), text)
}

/// `left` flush left and `right` flush right on one line, or on two lines
/// when they do not fit together.
fn two_column(left: &str, right: &str, width: usize) -> String {
    let used = char_len(left) + char_len(right);
    if used < width {
        return format!("{}{}{}", left, " ".repeat(width - used), right);
    }
    let pad = width.saturating_sub(char_len(right));
    format!("{}\n{}{}", left, " ".repeat(pad), right)
}

/// Greedy word wrap. A single word longer than `width` gets its own line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if char_len(&current) + 1 + char_len(word) <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Whole quantities print without decimals; others keep up to three.
fn format_quantity(quantity: f64) -> String {
    if !quantity.is_finite() {
        return "0".to_string();
    }
    if quantity.fract() == 0.0 {
        return format!("{:.0}", quantity);
    }
    let text = format!("{:.3}", quantity);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
