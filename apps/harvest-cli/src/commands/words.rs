//! `harvest words`: an amount in words.

use harvest_core::words::{amount_to_words_with, ScaleGrouping};

use crate::error::CliResult;

pub fn run(amount: f64, grouping: ScaleGrouping) -> CliResult<String> {
    Ok(amount_to_words_with(amount, grouping)?)
}
