//! Full `harvest` runs: arguments, config file and input file.

use clap::Parser;
use harvest_cli::{run, Cli};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn run_args(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(args).unwrap();
    run(cli).unwrap()
}

const CONFIG: &str = r#"
[seller]
name = "Green Valley Produce"
address = ["12 Market Road"]
gstin = "27AAPFU0939F1ZV"

[invoice]
width = 48
"#;

const PROCUREMENT: &str = r#"{
    "procurement_id": "PR-17",
    "vendor_name": "Sunrise Farms",
    "items": "[{\"product_id\":7,\"name\":\"Tomatoes\",\"quantity\":2,\"unit_price\":50}]",
    "cgst": 5, "sgst": 5, "delivery_fee": 10
}"#;

#[test]
fn invoice_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(&dir, "harvest.toml", CONFIG);
    let input = write_file(&dir, "pr-17.json", PROCUREMENT);

    let out = run_args(&[
        "harvest",
        "--config",
        config.to_str().unwrap(),
        "invoice",
        "--kind",
        "procurement",
        "-i",
        input.to_str().unwrap(),
        "--date",
        "2026-10-19",
    ]);

    assert!(out.contains("GREEN VALLEY PRODUCE"));
    assert!(out.contains("GSTIN: 27AAPFU0939F1ZV"));
    assert!(out.contains("Invoice No: PR-17               Date: 19-10-2026"));
    assert!(out.contains("Bill To: Sunrise Farms"));
    assert!(out.ends_with("One Hundred Twenty Rupees\n"));
}

#[test]
fn total_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(&dir, "harvest.toml", CONFIG);
    let input = write_file(&dir, "pr-17.json", PROCUREMENT);

    let out = run_args(&[
        "harvest",
        "--config",
        config.to_str().unwrap(),
        "total",
        "--kind",
        "procurement",
        "-i",
        input.to_str().unwrap(),
    ]);

    assert!(out.ends_with("Grand Total:  ₹120.00"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(&dir, "harvest.toml", "[invoice]\nwidth = 8\n");
    let cli = Cli::try_parse_from(["harvest", "--config", config.to_str().unwrap(), "words", "5"]).unwrap();

    assert!(run(cli).is_err());
}

#[test]
fn missing_input_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(&dir, "harvest.toml", CONFIG);
    let missing = dir.path().join("absent.json");
    let cli = Cli::try_parse_from([
        "harvest",
        "--config",
        config.to_str().unwrap(),
        "total",
        "--kind",
        "order",
        "-i",
        missing.to_str().unwrap(),
    ])
    .unwrap();

    let err = run(cli).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn missing_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("nowhere.toml");
    let cli = Cli::try_parse_from(["harvest", "--config", config.to_str().unwrap(), "words", "5"]).unwrap();

    let err = run(cli).unwrap_err();
    assert!(err.to_string().contains("nowhere.toml"));
}

#[test]
fn words_with_grouping_flag() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_file(&dir, "harvest.toml", CONFIG);
    let out = run_args(&[
        "harvest",
        "--config",
        config.to_str().unwrap(),
        "words",
        "1234567",
        "--grouping",
        "indian",
    ]);

    assert_eq!(out, "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Rupees");
}
