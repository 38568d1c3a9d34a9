use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

const SAMPLE: &str = r#"{
  "debt": {
    "months": ["Jan", "Feb"],
    "cards": { "Visa": [120.0, 80.0] }
  },
  "cashFlow": {
    "categories": [{ "from": "Income", "to": "Rent", "value": 1500 }]
  }
}"#;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("ledgerviz").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ledgerviz"));
}

#[test]
fn show_plots_exports_and_prints_stats() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data.json");
    std::fs::write(&data, SAMPLE).unwrap();
    let plot = dir.path().join("debt.svg");
    let out = dir.path().join("debt.csv");

    let mut cmd = Command::cargo_bin("ledgerviz").unwrap();
    cmd.args([
        "show",
        "--data",
        data.to_str().unwrap(),
        "--plot",
        plot.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
        "--stats",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Visa"))
        .stdout(predicate::str::contains("Total Debt"));
    assert!(plot.exists());
    assert!(out.exists());
}

#[test]
fn show_fails_on_missing_section() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data.json");
    std::fs::write(&data, r#"{"debt": {"months": [], "cards": {}}}"#).unwrap();

    let mut cmd = Command::cargo_bin("ledgerviz").unwrap();
    cmd.args(["show", "--data", data.to_str().unwrap(), "--stats"]);
    cmd.assert().failure();
}
