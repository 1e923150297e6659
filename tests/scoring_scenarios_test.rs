//! End-to-end scoring checks on hand-built parameter sets

use indoc::indoc;
use pretty_assertions::assert_eq;
use tokenomics::scenarios::{inflation_projection, PresetScenarios, ScenarioProvider};
use tokenomics::scoring::{Ruleset, ScoringEngine};
use tokenomics::{recommend, score, Error, TokenParameters, Verdict};

const REFERENCE_TOML: &str = indoc! {r#"
    circulating_supply = 500_000_000
    total_supply = 1_000_000_000
    max_supply = 1_000_000_000
    inflation_rate = 5.0
    emission_years_left = 5
    team_allocation = 15.0
    vesting_years = 3
    top_10_concentration = 30.0
    utility_gas = false
    utility_staking = true
    utility_governance = true
    utility_collateral = false
    utility_discount = false
    gov_timelock = true
    gov_multisig = true
    gov_dao_active = true
    incentive_lock = false
    incentive_staking = true
    incentive_burn = false
    lock_duration_months = 0
    burn_rate = 0.0
"#};

fn reference() -> TokenParameters {
    TokenParameters::from_toml_str(REFERENCE_TOML).unwrap()
}

#[test]
fn test_reference_token_is_viable() {
    let result = score(&reference()).unwrap();
    let value = result.final_score.value();
    assert!(value > 50.0 && value < 80.0, "final score {}", value);
    assert!(matches!(result.verdict, Verdict::Acceptable | Verdict::Good));
    assert_eq!(result.final_score.rounded(), 68.2);
}

#[test]
fn test_reference_token_under_legacy_rules() {
    let result = ScoringEngine::new(Ruleset::Legacy)
        .score(&reference())
        .unwrap();
    assert_eq!(result.final_score.rounded(), 69.0);
    assert_eq!(result.ruleset, Ruleset::Legacy);
}

#[test]
fn test_utility_extremes() {
    let mut params = reference();
    params.utility_gas = false;
    params.utility_staking = false;
    params.utility_governance = false;
    let none = score(&params).unwrap();
    assert_eq!(none.utility.value(), 0.0);
    assert!(none.utility.comment().to_lowercase().contains("no clear utility"));

    params.utility_gas = true;
    params.utility_staking = true;
    params.utility_governance = true;
    params.utility_collateral = true;
    params.utility_discount = true;
    assert_eq!(score(&params).unwrap().utility.value(), 100.0);
}

#[test]
fn test_captured_governance_floor() {
    let mut params = reference();
    params.gov_timelock = false;
    params.gov_multisig = false;
    params.gov_dao_active = false;
    params.top_10_concentration = 65.0;
    assert!(score(&params).unwrap().governance.value() <= 20.0);
}

#[test]
fn test_zero_dilution_skips_dilution_rule() {
    let mut params = reference();
    params.circulating_supply = 1_000_000_000.0;
    let result = score(&params).unwrap();
    assert!(result
        .inflation
        .comments
        .iter()
        .all(|c| !c.contains("dilution potential")));
}

#[test]
fn test_net_burn_with_burn_mechanism() {
    let mut params = reference();
    params.inflation_rate = -2.0;
    params.incentive_burn = true;
    params.burn_rate = 2.5;
    let result = score(&params).unwrap();
    assert!(result.incentives.comment().contains("Burn exceeds inflation"));
    assert!(result.inflation.comment().contains("net burn"));
}

#[test]
fn test_missing_field_is_named() {
    let without_burn = REFERENCE_TOML.replace("burn_rate = 0.0\n", "");
    let err = TokenParameters::from_toml_str(&without_burn).unwrap_err();
    assert!(matches!(err, Error::MissingField { field: "burn_rate" }));
}

#[test]
fn test_negative_count_is_named() {
    let negative = REFERENCE_TOML.replace("vesting_years = 3", "vesting_years = -1");
    let err = TokenParameters::from_toml_str(&negative).unwrap_err();
    assert_eq!(err.field(), Some("vesting_years"));
}

#[test]
fn test_every_preset_scores() {
    for id in PresetScenarios.scenario_ids() {
        let scenario = PresetScenarios.scenario(id);
        let result = score(&scenario.params).unwrap();
        assert!((0.0..=100.0).contains(&result.final_score.value()), "{}", id);
    }
}

#[test]
fn test_mature_token_outscores_early_stage() {
    let mature = score(&PresetScenarios.scenario("mature-store-of-value").params).unwrap();
    let early = score(&PresetScenarios.scenario("early-stage").params).unwrap();
    assert!(mature.final_score > early.final_score);
}

#[test]
fn test_recommendations_for_captured_governance() {
    let result = score(&PresetScenarios.scenario("captured-governance").params).unwrap();
    let advice = recommend(&result);
    assert!(advice.iter().any(|a| a.starts_with("Governance at risk")));
    assert!(advice.last().unwrap().starts_with("Very risky tokenomics"));
}

#[test]
fn test_decreasing_projection() {
    assert_eq!(
        inflation_projection("decreasing-inflation", 6),
        vec![10.0, 7.0, 5.0, 3.0, 1.0, 1.0]
    );
}
