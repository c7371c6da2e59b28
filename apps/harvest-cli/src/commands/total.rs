//! `harvest total`: totals breakdown for one document.

use harvest_backend::{parse_order, parse_procurement};
use harvest_core::invoice::{Invoiceable, InvoiceTotals, LineTotalSource};
use serde::Serialize;
use tracing::debug;

use super::DocumentKind;
use crate::error::CliResult;

#[derive(Serialize)]
struct TotalsReport<'a> {
    document: &'a str,
    #[serde(flatten)]
    totals: InvoiceTotals,
}

pub fn run(json: &str, kind: DocumentKind, source: LineTotalSource, as_json: bool) -> CliResult<String> {
    match kind {
        DocumentKind::Order => report(&parse_order(json)?, source, as_json),
        DocumentKind::Procurement => report(&parse_procurement(json)?, source, as_json),
    }
}

fn report<D: Invoiceable>(document: &D, source: LineTotalSource, as_json: bool) -> CliResult<String> {
    let totals = document.totals(source);
    debug!(
        document = document.document_number(),
        items = document.items().len(),
        grand_total = totals.grand_total,
        "Computed totals"
    );

    if as_json {
        let report = TotalsReport {
            document: document.document_number(),
            totals,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let rows = [
        ("Invoice No", document.document_number().to_string()),
        ("Subtotal", totals.subtotal_money().to_string()),
        ("CGST", totals.cgst_money().to_string()),
        ("SGST", totals.sgst_money().to_string()),
        ("Delivery Fee", totals.delivery_fee_money().to_string()),
        ("Grand Total", totals.grand_total_money().to_string()),
    ];
    Ok(rows
        .iter()
        .map(|(label, value)| format!("{:<14}{}", format!("{}:", label), value))
        .collect::<Vec<_>>()
        .join("\n"))
}
