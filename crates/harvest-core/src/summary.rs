//! # Invoice List Summary
//!
//! Totals many documents at once for the invoice list pages: summary cards
//! (count, total billed, average, largest), minimum-amount filtering, and
//! sorting by grand total.
//!
//! ```text
//! ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐
//! │  Invoices    │ │  Billed      │ │  Average     │ │  Largest     │
//! │  12          │ │  ₹48210.50   │ │  ₹4017.54    │ │  ₹9800.00    │
//! └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::invoice::{Invoiceable, InvoiceTotals, LineTotalSource};
use crate::money::Money;

// =============================================================================
// Totalled Documents
// =============================================================================

/// A borrowed document paired with its computed totals.
#[derive(Debug, Clone, Copy)]
pub struct Totalled<'a, D> {
    pub document: &'a D,
    pub totals: InvoiceTotals,
}

/// Computes totals for every document, keeping input order.
pub fn total_all<D: Invoiceable>(documents: &[D], source: LineTotalSource) -> Vec<Totalled<'_, D>> {
    documents
        .iter()
        .map(|document| Totalled {
            document,
            totals: document.totals(source),
        })
        .collect()
}

/// Keeps documents whose rounded grand total is at least `min_total`.
pub fn filter_by_min_total<'a, D>(rows: Vec<Totalled<'a, D>>, min_total: Money) -> Vec<Totalled<'a, D>> {
    rows.into_iter()
        .filter(|row| row.totals.grand_total_money() >= min_total)
        .collect()
}

/// Direction for [`sort_by_grand_total`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(ValidationError::InvalidFormat {
                field: "sort".to_string(),
                reason: format!("unknown value '{}', expected asc or desc", other),
            }),
        }
    }
}

/// Stable sort by grand total. Ties keep their input order in both
/// directions.
pub fn sort_by_grand_total<D>(rows: &mut [Totalled<'_, D>], order: SortOrder) {
    rows.sort_by(|a, b| {
        let ordering = a.totals.grand_total.total_cmp(&b.totals.grand_total);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

// =============================================================================
// Summary Cards
// =============================================================================

/// Figures shown on the invoice list summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceSummary {
    pub count: u32,
    /// Sum of grand totals, rounded once at the end.
    pub total: Money,
    pub average: Money,
    pub largest: Money,
}

impl InvoiceSummary {
    pub fn from_totals<'t, I>(totals: I) -> Self
    where
        I: IntoIterator<Item = &'t InvoiceTotals>,
    {
        let mut count: u32 = 0;
        let mut sum = 0.0;
        let mut largest: Option<f64> = None;

        for t in totals {
            count = count.saturating_add(1);
            sum += t.grand_total;
            largest = Some(match largest {
                Some(current) if current.total_cmp(&t.grand_total) != Ordering::Less => current,
                _ => t.grand_total,
            });
        }

        if count == 0 {
            return InvoiceSummary::default();
        }

        InvoiceSummary {
            count,
            total: Money::from_amount(sum),
            average: Money::from_amount(sum / count as f64),
            largest: Money::from_amount(largest.unwrap_or(0.0)),
        }
    }

    pub fn from_rows<D>(rows: &[Totalled<'_, D>]) -> Self {
        Self::from_totals(rows.iter().map(|row| &row.totals))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
