//! `harvest invoice`: the printed tax invoice for one document.

use chrono::NaiveDate;
use harvest_backend::{parse_order, parse_procurement};
use harvest_core::invoice::Invoiceable;
use harvest_core::printed::{PrintOptions, Seller, TaxInvoice};
use tracing::debug;

use super::DocumentKind;
use crate::error::CliResult;

pub fn run(
    json: &str,
    kind: DocumentKind,
    seller: &Seller,
    issued_on: NaiveDate,
    options: &PrintOptions,
) -> CliResult<String> {
    match kind {
        DocumentKind::Order => print(&parse_order(json)?, seller, issued_on, options),
        DocumentKind::Procurement => print(&parse_procurement(json)?, seller, issued_on, options),
    }
}

fn print<D: Invoiceable>(
    document: &D,
    seller: &Seller,
    issued_on: NaiveDate,
    options: &PrintOptions,
) -> CliResult<String> {
    let invoice = TaxInvoice::build(document, seller, issued_on, options)?;
    debug!(
        invoice = %invoice.invoice_number,
        lines = invoice.lines.len(),
        width = options.width,
        "Rendering tax invoice"
    );
    Ok(invoice.render())
}
