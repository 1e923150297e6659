//! Integration tests for the `tokenomics` binary

use assert_cmd::prelude::*;
use serde_json::Value;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn tokenomics(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tokenomics"));
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("TOKENOMICS_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

#[test]
fn test_score_scenario_as_json() {
    let dir = TempDir::new().unwrap();
    let output = tokenomics(&dir)
        .args(["score", "--scenario", "captured-governance", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["subject"], "captured-governance");
    assert_eq!(json["result"]["verdict"], "very_risky");
    assert!(json["recommendations"].as_array().unwrap().len() >= 3);
}

#[test]
fn test_score_params_file_with_config_ruleset() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".tokenomics.toml"),
        "[scoring]\nruleset = \"legacy\"\n\n[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("token.json"),
        r#"{
            "circulating_supply": 500000000, "total_supply": 1000000000,
            "max_supply": 1000000000, "inflation_rate": 5.0, "emission_years_left": 5,
            "team_allocation": 15.0, "vesting_years": 3, "top_10_concentration": 30.0,
            "utility_gas": false, "utility_staking": true, "utility_governance": true,
            "utility_collateral": false, "utility_discount": false,
            "gov_timelock": true, "gov_multisig": true, "gov_dao_active": true,
            "incentive_lock": false, "incentive_staking": true, "incentive_burn": false,
            "lock_duration_months": 0, "burn_rate": 0.0
        }"#,
    )
    .unwrap();

    let output = tokenomics(&dir)
        .args(["score", "--params", "token.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["result"]["ruleset"], "legacy");
    let final_score = json["result"]["final_score"].as_f64().unwrap();
    assert!((final_score - 69.0).abs() < 1e-9);
}

#[test]
fn test_invalid_params_fail_with_field_name() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("token.json"), r#"{"circulating_supply": 1.0}"#).unwrap();

    let output = tokenomics(&dir)
        .args(["score", "--params", "token.json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("total_supply"), "stderr: {}", stderr);
}

#[test]
fn test_score_from_market_data() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("market.json"),
        r#"[{"id": "fresh-token", "symbol": "frsh", "circulating_supply": 1.0e8,
             "total_supply": 1.0e9, "market_cap_usd": 2.0e7, "market_cap_rank": 640,
             "volume_24h": 3.0e5}]"#,
    )
    .unwrap();

    let output = tokenomics(&dir)
        .args([
            "score",
            "--token",
            "FRSH",
            "--market-data",
            "market.json",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["subject"], "fresh-token");
    assert!(json["notes"][0].as_str().unwrap().contains("estimated"));
    assert!(json["result"]["security"]["comments"][0]
        .as_str()
        .unwrap()
        .contains("no verified security data"));
}

#[test]
fn test_unknown_token_in_market_data() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("market.json"), "[]").unwrap();

    tokenomics(&dir)
        .args(["score", "--token", "ghost", "--market-data", "market.json"])
        .assert()
        .failure();
}

#[test]
fn test_terminal_output_to_file() {
    let dir = TempDir::new().unwrap();
    tokenomics(&dir)
        .args(["score", "--scenario", "net-burn", "--output", "report.txt"])
        .assert()
        .success();

    let report = fs::read_to_string(dir.path().join("report.txt")).unwrap();
    assert!(report.contains("Tokenomics Viability Index: net-burn"));
    assert!(report.contains("Burn exceeds inflation"));
    assert!(!report.contains("\u{1b}["));
}

#[test]
fn test_scenarios_listing() {
    let dir = TempDir::new().unwrap();
    let output = tokenomics(&dir)
        .args(["scenarios", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 15);
}

#[test]
fn test_project_command() {
    let dir = TempDir::new().unwrap();
    let output = tokenomics(&dir)
        .args(["project", "seasonal-farming", "--years", "4", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)["rates"],
        serde_json::json!([25.0, 25.0, 25.0, 5.0])
    );
}

#[test]
fn test_project_rejects_huge_year_count() {
    let dir = TempDir::new().unwrap();
    let output = tokenomics(&dir)
        .args(["project", "halving", "--years", "18446744073709551615"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--years"), "stderr: {}", stderr);
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_init_then_refuse() {
    let dir = TempDir::new().unwrap();
    tokenomics(&dir).arg("init").assert().success();
    assert!(dir.path().join(".tokenomics.toml").exists());
    tokenomics(&dir).arg("init").assert().failure();
    tokenomics(&dir).args(["init", "--force"]).assert().success();
}
