//! # Harvest CLI Library
//!
//! Argument parsing, configuration and subcommand dispatch for the `harvest`
//! binary. `main.rs` only initializes logging, calls [`run`] and prints.
//!
//! ## Module Organization
//! ```text
//! harvest_cli/
//! ├── lib.rs          ◄─── You are here (arguments & dispatch)
//! ├── config.rs       ◄─── CliConfig: defaults, TOML, HARVEST_* env
//! ├── error.rs        ◄─── CliError for subcommands
//! └── commands/
//!     ├── mod.rs      ◄─── DocumentKind, input reading
//!     ├── total.rs    ◄─── totals breakdown
//!     ├── summary.rs  ◄─── summary cards, filter, sort
//!     ├── invoice.rs  ◄─── printed tax invoice
//!     └── words.rs    ◄─── amount in words
//! ```

pub mod commands;
pub mod config;
pub mod error;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use harvest_core::summary::SortOrder;
use harvest_core::{LineTotalSource, ScaleGrouping};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::summary::SummaryOptions;
use commands::{read_input, DocumentKind};
use config::CliConfig;
use error::CliResult;

#[derive(Parser, Debug)]
#[command(name = "harvest", version, about = "Invoice totals and tax invoices for Harvest exports")]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Line total precedence: prefer_stored or recompute
    #[arg(long, global = true)]
    pub line_total: Option<LineTotalSource>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the totals breakdown for one document
    Total {
        #[arg(long, value_enum)]
        kind: DocumentKind,

        /// Input file (stdin when omitted)
        #[arg(short = 'i', long)]
        input: Option<PathBuf>,

        /// Print totals as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print summary cards for a list of documents
    Summary {
        #[arg(long, value_enum)]
        kind: DocumentKind,

        #[arg(short = 'i', long)]
        input: Option<PathBuf>,

        /// Keep documents whose grand total is at least this amount
        #[arg(long)]
        min_total: Option<f64>,

        /// Sort by grand total: asc or desc
        #[arg(long)]
        sort: Option<SortOrder>,
    },

    /// Print the tax invoice for one document
    Invoice {
        #[arg(long, value_enum)]
        kind: DocumentKind,

        #[arg(short = 'i', long)]
        input: Option<PathBuf>,

        /// Invoice date, YYYY-MM-DD (today when omitted)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Line width in columns
        #[arg(long)]
        width: Option<usize>,
    },

    /// Print an amount in words
    Words {
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// legacy or indian
        #[arg(long)]
        grouping: Option<ScaleGrouping>,
    },
}

/// Loads configuration and runs the chosen subcommand, returning the text to
/// print.
pub fn run(cli: Cli) -> CliResult<String> {
    let config = CliConfig::load(cli.config)?;
    let source = cli.line_total.unwrap_or(config.invoice.line_total);
    debug!(%source, "Line total precedence");

    match cli.command {
        Command::Total { kind, input, json } => {
            let text = read_input(input.as_deref())?;
            commands::total::run(&text, kind, source, json)
        }
        Command::Summary {
            kind,
            input,
            min_total,
            sort,
        } => {
            let text = read_input(input.as_deref())?;
            let options = SummaryOptions {
                source,
                min_total,
                sort,
            };
            commands::summary::run(&text, kind, options)
        }
        Command::Invoice {
            kind,
            input,
            date,
            width,
        } => {
            let text = read_input(input.as_deref())?;
            let mut options = config.print_options();
            options.line_total = source;
            if let Some(width) = width {
                options.width = width;
            }
            let issued_on = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            commands::invoice::run(&text, kind, &config.seller(), issued_on, &options)
        }
        Command::Words { amount, grouping } => {
            commands::words::run(amount, grouping.unwrap_or(config.invoice.grouping))
        }
    }
}

/// Initializes the tracing subscriber. Logs go to stderr so stdout carries
/// only command output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show adapter and command decisions
/// - `RUST_LOG=harvest_backend=debug` - Adapter only
/// - Default: WARN (recovered malformed input)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words() {
        let cli = Cli::try_parse_from(["harvest", "words", "1234.5", "--grouping", "indian"]).unwrap();
        match cli.command {
            Command::Words { amount, grouping } => {
                assert_eq!(amount, 1234.5);
                assert_eq!(grouping, Some(ScaleGrouping::Indian));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_summary() {
        let cli = Cli::try_parse_from([
            "harvest", "summary", "--kind", "procurement", "-i", "list.json", "--min-total", "500",
            "--sort", "desc", "--line-total", "recompute",
        ])
        .unwrap();

        assert_eq!(cli.line_total, Some(LineTotalSource::Recompute));
        match cli.command {
            Command::Summary {
                kind,
                input,
                min_total,
                sort,
            } => {
                assert_eq!(kind, DocumentKind::Procurement);
                assert_eq!(input, Some(PathBuf::from("list.json")));
                assert_eq!(min_total, Some(500.0));
                assert_eq!(sort, Some(SortOrder::Descending));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_invoice_date() {
        let cli = Cli::try_parse_from(["harvest", "invoice", "--kind", "order", "--date", "2026-10-19"]).unwrap();
        match cli.command {
            Command::Invoice { date, .. } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2026, 10, 19));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(Cli::try_parse_from(["harvest", "total", "--kind", "invoice"]).is_err());
        assert!(Cli::try_parse_from(["harvest", "words", "5", "--grouping", "roman"]).is_err());
    }
}
