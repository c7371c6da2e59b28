//! # Subcommands
//!
//! Each subcommand takes already-read JSON text plus options, and returns the
//! text to print. [`read_input`] fetches the JSON, and `main` does the printing.
//!
//! | Command   | Input                          | Output                    |
//! |-----------|--------------------------------|---------------------------|
//! | `total`   | one order or procurement       | totals breakdown          |
//! | `summary` | a list of them                 | summary cards and rows    |
//! | `invoice` | one order or procurement       | printed tax invoice       |
//! | `words`   | an amount                      | amount in words           |

pub mod invoice;
pub mod summary;
pub mod total;
pub mod words;

use clap::ValueEnum;
use std::io::Read;
use std::path::Path;

use crate::error::{CliError, CliResult};

/// Which backend entity the input holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentKind {
    Order,
    Procurement,
}

/// Reads the whole input from `path`, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> CliResult<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Input {
            source_name: path.display().to_string(),
            source,
        }),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Input {
                    source_name: "stdin".to_string(),
                    source,
                })?;
            Ok(text)
        }
    }
}
