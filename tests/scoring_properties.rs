//! Property-based tests for the scoring engine
//!
//! Invariants checked over arbitrary valid parameter sets:
//! - every component score and the final index stay in [0, 100]
//! - scoring is deterministic
//! - more concentration never improves distribution or governance
//! - more inflation above 2% never improves the inflation score
//! - recommendations are empty exactly in the quiet middle band

use proptest::prelude::*;
use tokenomics::scoring::distribution::score_distribution;
use tokenomics::scoring::governance::score_governance;
use tokenomics::scoring::inflation::score_inflation;
use tokenomics::scoring::Component;
use tokenomics::{recommend, score, MarketSignals, TokenParameters};

/// Score below which a component earns a recommendation
fn flag_threshold(component: Component) -> f64 {
    match component {
        Component::Utility | Component::Security => 40.0,
        _ => 50.0,
    }
}

fn supply() -> impl Strategy<Value = (f64, f64, f64)> {
    (0.0..1e12f64, 0.0..1e12f64, prop_oneof![Just(0.0), 0.0..1e12f64])
}

fn flags<const N: usize>() -> impl Strategy<Value = [bool; N]> {
    prop::array::uniform(any::<bool>())
}

fn market() -> impl Strategy<Value = Option<MarketSignals>> {
    prop::option::of(
        (
            prop::option::of(0.0..1e11f64),
            prop::option::of(0.0..1e12f64),
            prop::option::of(1u32..5000),
            prop::option::of(-100.0..500.0f64),
            prop::option::of(prop_oneof![Just("ethereum".to_string()), "[a-z]{3,10}"]),
        )
            .prop_map(|(volume, cap, rank, change, identifier)| MarketSignals {
                volume_24h: volume,
                market_cap_usd: cap,
                volume_to_market_cap: None,
                market_cap_rank: rank,
                price_change_30d: change,
                identifier,
            }),
    )
}

fn token_parameters() -> impl Strategy<Value = TokenParameters> {
    (
        supply(),
        (-100.0..200.0f64, 0u32..1000),
        (0.0..=100.0f64, 0u32..10, 0.0..=100.0f64),
        flags::<5>(),
        flags::<3>(),
        (flags::<3>(), 0u32..60, 0.0..10.0f64),
        market(),
    )
        .prop_map(
            |(
                (circulating, total, max),
                (inflation_rate, emission_years_left),
                (team, vesting, concentration),
                utility,
                governance,
                (incentives, lock_months, burn_rate),
                market,
            )| TokenParameters {
                circulating_supply: circulating,
                total_supply: total,
                max_supply: max,
                inflation_rate,
                emission_years_left,
                team_allocation: team,
                vesting_years: vesting,
                top_10_concentration: concentration,
                utility_gas: utility[0],
                utility_staking: utility[1],
                utility_governance: utility[2],
                utility_collateral: utility[3],
                utility_discount: utility[4],
                gov_timelock: governance[0],
                gov_multisig: governance[1],
                gov_dao_active: governance[2],
                incentive_lock: incentives[0],
                incentive_staking: incentives[1],
                incentive_burn: incentives[2],
                lock_duration_months: lock_months,
                burn_rate,
                market,
            },
        )
}

proptest! {
    #[test]
    fn prop_scores_are_bounded(params in token_parameters()) {
        let result = score(&params).unwrap();
        let final_score = result.final_score.value();
        prop_assert!((0.0..=100.0).contains(&final_score));
        for (component, component_score) in result.components() {
            prop_assert!(
                (0.0..=100.0).contains(&component_score.value()),
                "{} out of range: {}", component, component_score.value()
            );
        }
    }

    #[test]
    fn prop_scoring_is_deterministic(params in token_parameters()) {
        prop_assert_eq!(score(&params).unwrap(), score(&params).unwrap());
    }

    #[test]
    fn prop_recommendations_empty_only_in_middle_band(params in token_parameters()) {
        let result = score(&params).unwrap();
        let all_healthy = result
            .components()
            .all(|(component, s)| s.value() >= flag_threshold(component));
        let final_score = result.final_score.value();
        let quiet = all_healthy && (35.0..65.0).contains(&final_score);
        prop_assert_eq!(recommend(&result).is_empty(), quiet);
    }

    #[test]
    fn prop_concentration_never_helps_distribution(
        team in 0.0..=100.0f64,
        vesting in 0u32..10,
        low in 0.0..=100.0f64,
        high in 0.0..=100.0f64,
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        prop_assert!(
            score_distribution(team, vesting, high).value()
                <= score_distribution(team, vesting, low).value()
        );
    }

    #[test]
    fn prop_concentration_never_helps_governance(
        governance in prop::array::uniform3(any::<bool>()),
        low in 0.0..=100.0f64,
        high in 0.0..=100.0f64,
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let [timelock, multisig, dao] = governance;
        prop_assert!(
            score_governance(timelock, multisig, dao, high).value()
                <= score_governance(timelock, multisig, dao, low).value()
        );
    }

    #[test]
    fn prop_inflation_above_two_percent_never_helps(
        (circulating, total, max) in supply(),
        years in 0u32..1000,
        low in 2.0..200.0f64,
        high in 2.0..200.0f64,
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        prop_assert!(
            score_inflation(circulating, total, max, high, years).value()
                <= score_inflation(circulating, total, max, low, years).value()
        );
    }
}
