//! `harvest summary`: summary cards over a list of documents, optionally
//! filtered by a minimum grand total and sorted.

use harvest_backend::{parse_orders, parse_procurements};
use harvest_core::invoice::{Invoiceable, LineTotalSource};
use harvest_core::summary::{filter_by_min_total, sort_by_grand_total, total_all, InvoiceSummary, SortOrder};
use harvest_core::Money;
use tracing::debug;

use super::DocumentKind;
use crate::error::CliResult;

/// Options for one summary run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryOptions {
    pub source: LineTotalSource,
    pub min_total: Option<f64>,
    pub sort: Option<SortOrder>,
}

pub fn run(json: &str, kind: DocumentKind, options: SummaryOptions) -> CliResult<String> {
    let out = match kind {
        DocumentKind::Order => summarize(&parse_orders(json)?, options),
        DocumentKind::Procurement => summarize(&parse_procurements(json)?, options),
    };
    Ok(out)
}

fn summarize<D: Invoiceable>(documents: &[D], options: SummaryOptions) -> String {
    let mut rows = total_all(documents, options.source);

    if let Some(min_total) = options.min_total {
        let before = rows.len();
        rows = filter_by_min_total(rows, Money::from_amount(min_total));
        debug!(before, after = rows.len(), min_total, "Applied minimum total filter");
    }
    if let Some(order) = options.sort {
        sort_by_grand_total(&mut rows, order);
    }

    let summary = InvoiceSummary::from_rows(&rows);
    let mut lines = vec![
        format!("Invoices: {}", summary.count),
        format!("Billed:   {}", summary.total),
        format!("Average:  {}", summary.average),
        format!("Largest:  {}", summary.largest),
    ];

    if !rows.is_empty() {
        let id_width = rows
            .iter()
            .map(|row| row.document.document_number().chars().count())
            .max()
            .unwrap_or(0);
        lines.push(String::new());
        for row in &rows {
            lines.push(format!(
                "{:<width$}  {:>12}",
                row.document.document_number(),
                row.totals.grand_total_money().to_string(),
                width = id_width
            ));
        }
    }

    lines.join("\n")
}
