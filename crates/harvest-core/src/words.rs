//! # Amount in Words
//!
//! Writes a rupee amount out in English for printed tax invoices:
//! `1234.50` → `"One Thousand Two Hundred Thirty Four Rupees and Fifty Paise"`.
//!
//! ## Scale Grouping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  LEGACY (default)  every scale word is a ×1000 step                     │
//! │                                                                         │
//! │     1,234,567  →  [1] Lakh [234] Thousand [567]                         │
//! │                   "One Lakh Two Hundred Thirty Four Thousand ..."       │
//! │                                                                         │
//! │  INDIAN            3 digits, then groups of 2                           │
//! │                                                                         │
//! │     12,34,567  →  [12] Lakh [34] Thousand [567]                         │
//! │                   "Twelve Lakh Thirty Four Thousand ..."                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Legacy grouping is what invoices have always been printed with, so it
//! stays the default. Switching to Indian grouping changes the wording of
//! any amount of one lakh or more.
//!
//! ## Rejected Input
//! Negative, NaN, infinite, and amounts beyond [`MAX_WORDS_AMOUNT`] return a
//! [`CoreError`] instead of a string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};

const UNITS: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten", "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen",
    "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Scale words for successive ×1000 chunks in legacy grouping.
const LEGACY_SCALES: [&str; 4] = ["", "Thousand", "Lakh", "Crore"];

/// Largest whole-rupee value that can be written (four thousand-groups).
const MAX_RUPEES: u64 = 999_999_999_999;

/// Largest amount accepted by the converter.
pub const MAX_WORDS_AMOUNT: f64 = 999_999_999_999.99;

// =============================================================================
// Scale Grouping
// =============================================================================

/// How digits are grouped under Thousand / Lakh / Crore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ScaleGrouping {
    /// Each scale word multiplies by 1000.
    #[default]
    Legacy,
    /// Thousand = 10^3, Lakh = 10^5, Crore = 10^7.
    Indian,
}

impl fmt::Display for ScaleGrouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleGrouping::Legacy => write!(f, "legacy"),
            ScaleGrouping::Indian => write!(f, "indian"),
        }
    }
}

impl FromStr for ScaleGrouping {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(ScaleGrouping::Legacy),
            "indian" => Ok(ScaleGrouping::Indian),
            other => Err(ValidationError::InvalidFormat {
                field: "words_grouping".to_string(),
                reason: format!("unknown value '{}', expected legacy or indian", other),
            }),
        }
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Converts an amount using legacy grouping.
///
/// ## Example
/// ```rust
/// use harvest_core::words::amount_to_words;
///
/// assert_eq!(
///     amount_to_words(1234.50).unwrap(),
///     "One Thousand Two Hundred Thirty Four Rupees and Fifty Paise"
/// );
/// assert_eq!(amount_to_words(0.0).unwrap(), "Zero Rupees");
/// assert!(amount_to_words(-1.0).is_err());
/// ```
pub fn amount_to_words(amount: f64) -> CoreResult<String> {
    amount_to_words_with(amount, ScaleGrouping::Legacy)
}

/// Converts an amount using the given scale grouping.
pub fn amount_to_words_with(amount: f64, grouping: ScaleGrouping) -> CoreResult<String> {
    let (rupees, paise) = split_amount(amount)?;

    let mut words: Vec<&'static str> = Vec::new();
    if rupees == 0 {
        words.push("Zero");
    } else {
        match grouping {
            ScaleGrouping::Legacy => legacy_words(rupees, &mut words),
            ScaleGrouping::Indian => indian_words(rupees, &mut words),
        }
    }
    words.push("Rupees");

    if paise > 0 {
        words.push("and");
        below_hundred(paise, &mut words);
        words.push("Paise");
    }

    Ok(words.join(" "))
}

// =============================================================================
// Helpers
// =============================================================================

/// Splits an amount into whole rupees and 0-99 paise.
///
/// Paise come from rounding the whole amount to paise first, so 0.999 is
/// one rupee rather than "One Hundred Paise".
fn split_amount(amount: f64) -> CoreResult<(u64, u64)> {
    if !amount.is_finite() {
        return Err(CoreError::NonFiniteAmount);
    }
    if amount < 0.0 {
        return Err(CoreError::NegativeAmount(amount));
    }

    let total_paise = (amount * 100.0).round();
    if total_paise > (MAX_RUPEES * 100 + 99) as f64 {
        return Err(CoreError::AmountTooLarge {
            amount,
            max: MAX_WORDS_AMOUNT,
        });
    }

    let total_paise = total_paise as u64;
    Ok((total_paise / 100, total_paise % 100))
}

/// Legacy grouping: chunk by 1000, one scale word per chunk.
fn legacy_words(rupees: u64, out: &mut Vec<&'static str>) {
    let mut chunks = Vec::with_capacity(LEGACY_SCALES.len());
    let mut rest = rupees;
    while rest > 0 {
        chunks.push(rest % 1000);
        rest /= 1000;
    }

    for (scale, chunk) in chunks.iter().enumerate().rev() {
        if *chunk == 0 {
            continue;
        }
        below_thousand(*chunk, out);
        if !LEGACY_SCALES[scale].is_empty() {
            out.push(LEGACY_SCALES[scale]);
        }
    }
}

/// Indian grouping: crore / lakh / thousand / hundreds.
fn indian_words(rupees: u64, out: &mut Vec<&'static str>) {
    let crores = rupees / 10_000_000;
    let lakhs = (rupees / 100_000) % 100;
    let thousands = (rupees / 1000) % 100;
    let hundreds = rupees % 1000;

    if crores > 0 {
        // crores < 10^5 given MAX_RUPEES, so this recursion is one level deep
        indian_words(crores, out);
        out.push("Crore");
    }
    if lakhs > 0 {
        below_hundred(lakhs, out);
        out.push("Lakh");
    }
    if thousands > 0 {
        below_hundred(thousands, out);
        out.push("Thousand");
    }
    if hundreds > 0 {
        below_thousand(hundreds, out);
    }
}

fn below_thousand(n: u64, out: &mut Vec<&'static str>) {
    let hundreds = n / 100;
    if hundreds > 0 {
        out.push(UNITS[hundreds as usize]);
        out.push("Hundred");
    }
    below_hundred(n % 100, out);
}

fn below_hundred(n: u64, out: &mut Vec<&'static str>) {
    match n {
        0 => {}
        1..=9 => out.push(UNITS[n as usize]),
        10..=19 => out.push(TEENS[(n - 10) as usize]),
        _ => {
            out.push(TENS[(n / 10) as usize]);
            if n % 10 > 0 {
                out.push(UNITS[(n % 10) as usize]);
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
