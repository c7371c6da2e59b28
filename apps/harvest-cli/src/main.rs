//! # Harvest Command-Line Entry Point
//!
//! ```text
//!   JSON export ──► harvest-backend adapters ──► harvest-core ──► stdout
//!   (file/stdin)                                                  (logs: stderr)
//! ```
//!
//! The actual setup is in lib.rs for testability.

use anyhow::Context;
use clap::Parser;
use harvest_cli::Cli;

fn main() -> anyhow::Result<()> {
    harvest_cli::init_tracing();

    let cli = Cli::parse();
    let output = harvest_cli::run(cli).context("harvest command failed")?;

    println!("{}", output.trim_end());
    Ok(())
}
